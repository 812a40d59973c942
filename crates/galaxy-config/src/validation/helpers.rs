//! Range check shared by the section validators.

use std::fmt::Display;

/// Record `name` as out of range unless `min <= value <= max`.
///
/// NaN never lies inside a range, so non-finite floats are rejected too.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display + Copy,
{
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
