//! Galaxy parameter validation against the declared control bounds.

use crate::colors::validate_color;
use crate::controls::{ControlId, CONTROLS};
use crate::schema::GalaxyParams;

use super::helpers::check_range;

/// Validate every galaxy parameter.
///
/// Slider ranges come from [`CONTROLS`] so the panel and the config file
/// accept the same values.
pub(crate) fn validate_galaxy(errors: &mut Vec<String>, params: &GalaxyParams) {
    for spec in &CONTROLS {
        let Some((min, max, _)) = spec.bounds() else {
            continue;
        };
        match spec.id {
            ControlId::Count => {
                check_range(errors, spec.key, params.count, min as u32, max as u32)
            }
            ControlId::Branches => {
                check_range(errors, spec.key, params.branches, min as u32, max as u32)
            }
            ControlId::Size => check_range(errors, spec.key, params.size, min, max),
            ControlId::Radius => check_range(errors, spec.key, params.radius, min, max),
            ControlId::Spin => check_range(errors, spec.key, params.spin, min, max),
            ControlId::Randomness => {
                check_range(errors, spec.key, params.randomness, min, max)
            }
            ControlId::RandomnessPower => {
                check_range(errors, spec.key, params.randomness_power, min, max)
            }
            ControlId::InsideColor | ControlId::OutsideColor => {}
        }
    }

    for (name, value) in [
        (ControlId::InsideColor.spec().key, &params.inside_color),
        (ControlId::OutsideColor.spec().key, &params.outside_color),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
}
