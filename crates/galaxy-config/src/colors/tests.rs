//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#ff6030").unwrap();
    assert_eq!(c, Color::from_rgba(255, 96, 48, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#1b398480").unwrap();
    assert_eq!(c, Color::from_rgba(27, 57, 132, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_hex_uppercase() {
    let c = parse_color("#FF6030").unwrap();
    assert_eq!(c, Color::from_rgba(255, 96, 48, 255));
}

#[test]
fn parse_rgb_without_alpha() {
    let c = parse_color("rgb(0, 0, 255)").unwrap();
    assert_eq!(c, Color::from_rgba(0, 0, 255, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,212,255,0.12)").unwrap();
    assert_eq!((c.r, c.g, c.b), (0, 212, 255));
    // 0.12 * 255 = 30.6 -> 31
    assert_eq!(c.a, 31);
}

#[test]
fn parse_rgba_integer_alpha() {
    let c = parse_color("rgba(10,20,30,200)").unwrap();
    assert_eq!(c.a, 200);
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
}

#[test]
fn parse_linear_rgb_of_pure_red() {
    let [r, g, b] = parse_linear_rgb("#ff0000").unwrap();
    assert!((r - 1.0).abs() < 1e-6);
    assert!(g.abs() < 1e-6);
    assert!(b.abs() < 1e-6);
}

#[test]
fn validate_color_accepts_valid() {
    assert!(validate_color("#ff6030"));
    assert!(validate_color("#1b398480"));
    assert!(validate_color("#f00"));
    assert!(validate_color("rgb(1,2,3)"));
    assert!(validate_color("rgba(0,212,255,0.12)"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("not-a-color"));
    assert!(!validate_color("#12345"));
    assert!(!validate_color("rgb(10,20)"));
    assert!(!validate_color("rgb(999,0,0)"));
}

#[test]
fn parse_default_galaxy_colors() {
    let params = crate::schema::GalaxyParams::default();
    for c in [&params.inside_color, &params.outside_color] {
        assert!(parse_color(c).is_ok(), "failed to parse default color: {c}");
    }
}
