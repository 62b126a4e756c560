// Host-side tests for tuning constants and their mathematical relationships.

use app_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Camera must sit in front of the far plane with a positive field of view.
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(NEAR_PLANE > 0.0 && NEAR_PLANE < FAR_PLANE);
    assert!(CAMERA_Z > NEAR_PLANE && CAMERA_Z < FAR_PLANE);

    // Drift and hover amplitudes are small world-space nudges.
    assert!(DRIFT_AMP_XY > 0.0 && DRIFT_AMP_XY < 1.0);
    assert!(DRIFT_AMP_Z > 0.0 && DRIFT_AMP_Z <= DRIFT_AMP_XY);
    assert!(HOVER_OFFSET_SCALE > 0.0 && HOVER_OFFSET_SCALE < 1.0);
    assert!(HOVER_DAMP_SPAN > 0.0 && HOVER_DAMP_SPAN <= 1.0);

    // Spring parameters.
    assert!(SCROLL_STIFFNESS > 0.0);
    assert!(SCROLL_DAMPING > 0.0);
    assert!(SPRING_MAX_DT > 0.0 && SPRING_MAX_DT < 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shading_factors_cover_the_unit_range() {
    // A seed of 0 gives the base opacity, a seed of 1 gives full opacity.
    assert_eq!(ALPHA_BASE + ALPHA_SPAN, 1.0);
    // Particle sizes span [SIZE_MIN, 1.0].
    assert_eq!(SIZE_MIN + SIZE_SPAN, 1.0);
    assert!(CENTER_BRIGHTEN_MAX > 0.0 && CENTER_BRIGHTEN_MAX <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_spring_is_at_least_critically_damped() {
    // Damping ratio = c / (2 * sqrt(k)); anything >= 1 cannot overshoot.
    let ratio = SCROLL_DAMPING / (2.0 * SCROLL_STIFFNESS.sqrt());
    assert!(ratio >= 1.0, "ratio = {ratio}");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_fade_window_sits_inside_the_scroll_range() {
    assert!((0.0..=1.0).contains(&STAR_FADE_START));
    assert!(STAR_FADE_START < STAR_FADE_END);
    assert!(STAR_FADE_END <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_describe_a_usable_field() {
    assert!(DEFAULT_PARTICLE_COUNT > 0);
    assert!(DEFAULT_SPREAD > 0.0);
    assert!(DEFAULT_BASE_SIZE > 0.0);
    assert_eq!(DEFAULT_PALETTE.len(), 3);

    let config = FieldConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_decay_drains_within_capacity_lifetime() {
    assert!(TRAIL_CAPACITY > 0);
    assert!(TRAIL_OPACITY_DECAY > 0.0 && TRAIL_OPACITY_DECAY < 1.0);
    assert!(TRAIL_SCALE_DECAY > 0.0 && TRAIL_SCALE_DECAY < 1.0);
    assert!(TRAIL_TICK_SEC > 0.0);
}
