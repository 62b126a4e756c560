// Host-side tests for particle-field generation, displacement purity, and
// the animator lifecycle.

use app_core::{ConfigError, FieldAnimator, FieldConfig, ParticleField, PointerState};

fn small_config() -> FieldConfig {
    FieldConfig {
        particle_count: 64,
        spread: 10.0,
        ..FieldConfig::default()
    }
}

#[test]
fn generate_produces_exactly_count_particles_inside_the_cube() {
    let config = FieldConfig {
        particle_count: 1000,
        spread: 18.0,
        ..FieldConfig::default()
    };
    let field = ParticleField::generate(config, 7).unwrap();
    assert_eq!(field.len(), 1000);
    let half = 18.0 / 2.0;
    for p in field.positions() {
        assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
    }
}

#[test]
fn generate_attribute_ranges() {
    let field = ParticleField::generate(small_config(), 3).unwrap();
    for r in field.seeds() {
        assert!(r.x >= 0.0 && r.x < 1.0);
        assert!(r.y >= 0.0 && r.y < 1.0);
        assert!(r.z >= 0.0 && r.z < 1.0);
    }
    for i in 0..field.len() {
        let a = field.alpha_factor(i);
        assert!(a >= 0.3 && a <= 1.0);
    }
    for inst in field.instance_data() {
        assert!(inst.size >= 0.5 && inst.size <= 1.0);
        assert_eq!(inst.color[3], 1.0);
    }
}

#[test]
fn generate_is_deterministic_per_seed() {
    let a = ParticleField::generate(small_config(), 42).unwrap();
    let b = ParticleField::generate(small_config(), 42).unwrap();
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.seeds(), b.seeds());

    let c = ParticleField::generate(small_config(), 43).unwrap();
    assert_ne!(a.positions(), c.positions());
}

#[test]
fn generate_rejects_invalid_configs() {
    let mut config = small_config();
    config.particle_count = 0;
    assert!(matches!(
        ParticleField::generate(config, 0),
        Err(ConfigError::ZeroParticleCount)
    ));

    let mut config = small_config();
    config.palette.clear();
    assert!(matches!(
        ParticleField::generate(config, 0),
        Err(ConfigError::EmptyPalette)
    ));

    let mut config = small_config();
    config.spread = -1.0;
    assert!(matches!(
        ParticleField::generate(config, 0),
        Err(ConfigError::NonPositiveSpread(_))
    ));

    let mut config = small_config();
    config.base_size = 0.0;
    assert!(matches!(
        ParticleField::generate(config, 0),
        Err(ConfigError::NonPositiveBaseSize(_))
    ));
}

#[test]
fn set_hex_palette_rejects_bad_colors_and_empty_lists() {
    let mut config = small_config();
    assert!(config.set_hex_palette(&["#f28fff", "oops"]).is_err());
    assert!(matches!(
        config.set_hex_palette(&[]),
        Err(ConfigError::EmptyPalette)
    ));
    config.set_hex_palette(&["#f28fff", "#ffffff"]).unwrap();
    assert_eq!(config.palette.len(), 2);
}

#[test]
fn displacement_is_idempotent() {
    let field = ParticleField::generate(small_config(), 11).unwrap();
    let pointer = PointerState { x: 0.4, y: -0.7 };
    let a = field.displaced_positions(1.75, pointer);
    let b = field.displaced_positions(1.75, pointer);
    assert_eq!(a, b, "same inputs must yield identical displaced positions");
}

#[test]
fn pointer_has_no_effect_when_hover_reactive_is_off() {
    let config = FieldConfig {
        hover_reactive: false,
        ..small_config()
    };
    let field = ParticleField::generate(config, 5).unwrap();
    let still = field.displaced_positions(2.0, PointerState::default());
    let moved = field.displaced_positions(2.0, PointerState { x: 1.0, y: 1.0 });
    assert_eq!(still, moved);

    // The animator also refuses to record pointer state for such a field.
    let config = FieldConfig {
        hover_reactive: false,
        ..small_config()
    };
    let mut animator = FieldAnimator::new(ParticleField::generate(config, 5).unwrap());
    animator.on_pointer_move(1.0, 0.5);
    assert_eq!(animator.pointer(), PointerState::default());
}

#[test]
fn disabling_drift_freezes_particles_at_their_base_positions() {
    let config = FieldConfig {
        hover_reactive: false,
        disable_rotational_drift: true,
        ..small_config()
    };
    let field = ParticleField::generate(config, 9).unwrap();
    let displaced = field.displaced_positions(123.4, PointerState::default());
    assert_eq!(displaced.as_slice(), field.positions());
}

#[test]
fn animator_clock_accumulates_and_ignores_negative_dt() {
    let mut animator = FieldAnimator::new(ParticleField::generate(small_config(), 1).unwrap());
    let p1 = animator.frame(0.5).unwrap();
    let p2 = animator.frame(0.25).unwrap();
    assert!((p1.elapsed_seconds - 0.5).abs() < 1e-6);
    assert!((p2.elapsed_seconds - 0.75).abs() < 1e-6);
    let p3 = animator.frame(-1.0).unwrap();
    assert_eq!(p3.elapsed_seconds, p2.elapsed_seconds);
}

#[test]
fn teardown_makes_every_operation_a_no_op() {
    let mut animator = FieldAnimator::new(ParticleField::generate(small_config(), 1).unwrap());
    assert!(animator.frame(0.016).is_some());

    animator.teardown();
    assert!(!animator.is_active());
    assert!(
        animator.frame(0.016).is_none(),
        "no frame parameters may be produced after teardown"
    );
    animator.on_pointer_move(0.9, 0.9);
    assert_eq!(animator.pointer(), PointerState::default());

    // Idempotent.
    animator.teardown();
    assert!(animator.frame(0.016).is_none());
}

#[test]
fn hover_at_full_right_pushes_every_particle_right() {
    // End-to-end: the site's sunset-star configuration with the pointer at
    // normalized (1, 0). The offset scales positively with pointer X and the
    // per-particle damping factor stays within [0.5, 1.0], so every X must
    // move by at least 0.3 * 0.5.
    let mut config = FieldConfig {
        particle_count: 800,
        spread: 18.0,
        hover_reactive: true,
        ..FieldConfig::default()
    };
    config
        .set_hex_palette(&["#f28fff", "#ffffff", "#c9a0ff"])
        .unwrap();

    let mut animator = FieldAnimator::new(ParticleField::generate(config, 2024).unwrap());
    let elapsed = 1.25;

    let before = animator
        .field()
        .displaced_positions(elapsed, animator.pointer());
    animator.on_pointer_move(1.0, 0.0);
    let after = animator
        .field()
        .displaced_positions(elapsed, animator.pointer());

    assert_eq!(before.len(), 800);
    for (b, a) in before.iter().zip(after.iter()) {
        let dx = a.x - b.x;
        assert!(dx >= 0.15 - 1e-5, "dx = {dx}");
        assert!(dx <= 0.3 + 1e-5, "dx = {dx}");
        assert_eq!(a.y, b.y, "pointer Y is zero, so Y must not move");
    }
}
