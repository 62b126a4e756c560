// Host-side tests for packed-color interpolation and the environment palette.

use app_core::{
    css_hex, lerp_color, parse_hex_color, unpack_rgb, ConfigError, EnvironmentPalette, SUNRISE,
    SUNSET,
};

#[test]
fn lerp_color_identity_for_any_t() {
    let c = 0x89f0d1;
    for t in [-1.0, 0.0, 0.25, 0.5, 0.75, 1.0, 2.0] {
        assert_eq!(lerp_color(c, c, t), c, "t = {t}");
    }
}

#[test]
fn lerp_color_endpoints() {
    let c1 = 0x0dbff7;
    let c2 = 0x0a13aa;
    assert_eq!(lerp_color(c1, c2, 0.0), c1);
    assert_eq!(lerp_color(c1, c2, 1.0), c2);
}

#[test]
fn lerp_color_midpoint_rounds_half_up() {
    // Each channel interpolates to 127.5, which rounds to 128.
    assert_eq!(lerp_color(0x000000, 0xFFFFFF, 0.5), 0x808080);
}

#[test]
fn lerp_color_clamps_t() {
    let c1 = 0xff9919;
    let c2 = 0xffffff;
    assert_eq!(lerp_color(c1, c2, -0.5), c1);
    assert_eq!(lerp_color(c1, c2, 1.5), c2);
}

#[test]
fn parse_hex_roundtrip() {
    assert_eq!(parse_hex_color("#f28fff").unwrap(), 0xf28fff);
    assert_eq!(parse_hex_color("#C9A0FF").unwrap(), 0xc9a0ff);
    assert_eq!(css_hex(0xf28fff), "#f28fff");
    assert_eq!(css_hex(0x00_00ff), "#0000ff");
}

#[test]
fn parse_hex_rejects_malformed_input() {
    assert!(matches!(
        parse_hex_color("f28fff"),
        Err(ConfigError::BadColor(_))
    ));
    assert!(matches!(
        parse_hex_color("#f28f"),
        Err(ConfigError::BadColor(_))
    ));
    assert!(matches!(
        parse_hex_color("#zzzzzz"),
        Err(ConfigError::BadColor(_))
    ));
}

#[test]
fn unpack_rgb_normalizes_channels() {
    let [r, g, b] = unpack_rgb(0xff8000);
    assert!((r - 1.0).abs() < 1e-6);
    assert!((g - 128.0 / 255.0).abs() < 1e-6);
    assert!(b.abs() < 1e-6);
}

#[test]
fn palette_blend_endpoints_match_presets() {
    assert_eq!(EnvironmentPalette::blend(&SUNRISE, &SUNSET, 0.0), SUNRISE);
    assert_eq!(EnvironmentPalette::blend(&SUNRISE, &SUNSET, 1.0), SUNSET);
}

#[test]
fn palette_blend_interpolates_every_field() {
    let mid = EnvironmentPalette::blend(&SUNRISE, &SUNSET, 0.5);
    assert_eq!(mid.background, SUNRISE.background); // identical endpoints stay put
    assert_eq!(mid.sky, lerp_color(SUNRISE.sky, SUNSET.sky, 0.5));
    assert_eq!(mid.cloud, lerp_color(SUNRISE.cloud, SUNSET.cloud, 0.5));
    assert_eq!(
        mid.cloud_shadow,
        lerp_color(SUNRISE.cloud_shadow, SUNSET.cloud_shadow, 0.5)
    );
    assert_eq!(mid.sun, lerp_color(SUNRISE.sun, SUNSET.sun, 0.5));
    assert_eq!(
        mid.sun_glare,
        lerp_color(SUNRISE.sun_glare, SUNSET.sun_glare, 0.5)
    );
    assert_eq!(
        mid.sunlight,
        lerp_color(SUNRISE.sunlight, SUNSET.sunlight, 0.5)
    );
}
