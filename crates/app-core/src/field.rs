//! Particle field: one-shot buffer generation, pure per-frame displacement,
//! and the animator lifecycle wrapped around them.
//!
//! The buffers are generated once at construction and never mutated; every
//! displaced position is a pure function of elapsed time, the per-particle
//! random seed, and the transient pointer state. Changing any construction
//! parameter means regenerating the whole field.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::color::{parse_hex_color, unpack_rgb};
use crate::constants::*;
use crate::error::ConfigError;
use crate::pointer::PointerState;

/// Construction-time configuration, immutable for the field's lifetime.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub particle_count: u32,
    /// Half-width of the spawn cube is `spread / 2`.
    pub spread: f32,
    /// Time-scale multiplier applied to the drift clock.
    pub speed: f32,
    /// Linear RGB palette; one entry is picked per particle at creation.
    pub palette: SmallVec<[[f32; 3]; 4]>,
    /// Global size multiplier feeding the projected point size.
    pub base_size: f32,
    pub hover_reactive: bool,
    pub alpha_blending: bool,
    pub disable_rotational_drift: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            spread: DEFAULT_SPREAD,
            speed: DEFAULT_SPEED,
            palette: DEFAULT_PALETTE.iter().map(|&c| unpack_rgb(c)).collect(),
            base_size: DEFAULT_BASE_SIZE,
            hover_reactive: true,
            alpha_blending: true,
            disable_rotational_drift: false,
        }
    }
}

impl FieldConfig {
    /// Replace the palette with colors parsed from `"#rrggbb"` strings.
    pub fn set_hex_palette(&mut self, colors: &[&str]) -> Result<(), ConfigError> {
        let mut palette = SmallVec::new();
        for c in colors {
            palette.push(unpack_rgb(parse_hex_color(c)?));
        }
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.palette = palette;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticleCount);
        }
        if !(self.spread > 0.0) {
            return Err(ConfigError::NonPositiveSpread(self.spread));
        }
        if !(self.base_size > 0.0) {
            return Err(ConfigError::NonPositiveBaseSize(self.base_size));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

/// Static per-particle attributes packed for GPU instancing; uploaded once.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub seed: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Flat per-particle attribute buffers, generated once and never mutated.
pub struct ParticleField {
    config: FieldConfig,
    positions: Vec<Vec3>,
    seeds: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    sizes: Vec<f32>,
}

impl ParticleField {
    /// Generate the particle buffers. Deterministic for a given seed.
    pub fn generate(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let n = config.particle_count as usize;
        let spread = config.spread;

        let mut positions = Vec::with_capacity(n);
        let mut seeds = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        let mut sizes = Vec::with_capacity(n);
        for _ in 0..n {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            ));
            seeds.push(Vec3::new(rng.gen(), rng.gen(), rng.gen()));
            colors.push(config.palette[rng.gen_range(0..config.palette.len())]);
            sizes.push(SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN);
        }
        log::debug!("[field] generated {} particles, spread {}", n, spread);

        Ok(Self {
            config,
            positions,
            seeds,
            colors,
            sizes,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn seeds(&self) -> &[Vec3] {
        &self.seeds
    }

    /// Per-particle opacity factor applied when alpha blending is enabled.
    #[inline]
    pub fn alpha_factor(&self, i: usize) -> f32 {
        ALPHA_BASE + self.seeds[i].x * ALPHA_SPAN
    }

    /// Displaced position of particle `i` at `elapsed` seconds.
    ///
    /// Pure: the stored buffers are never written, so the same elapsed time
    /// and pointer state always produce the same output. This mirrors the
    /// vertex shader exactly and is the reference the tests check against.
    #[inline]
    pub fn displacement(&self, i: usize, elapsed: f32, pointer: PointerState) -> Vec3 {
        let r = self.seeds[i];
        let t = elapsed * self.config.speed;
        let mut out = self.positions[i];
        if !self.config.disable_rotational_drift {
            out.x += (t + r.x * TAU).sin() * DRIFT_AMP_XY;
            out.y += (t + r.y * TAU).cos() * DRIFT_AMP_XY;
            out.z += (t + r.z * TAU).sin() * DRIFT_AMP_Z;
        }
        if self.config.hover_reactive {
            out.x += pointer.x * HOVER_OFFSET_SCALE * (1.0 - r.x * HOVER_DAMP_SPAN);
            out.y += pointer.y * HOVER_OFFSET_SCALE * (1.0 - r.y * HOVER_DAMP_SPAN);
        }
        out
    }

    /// Displace every particle. Allocates only the output vector.
    pub fn displaced_positions(&self, elapsed: f32, pointer: PointerState) -> Vec<Vec3> {
        (0..self.len())
            .map(|i| self.displacement(i, elapsed, pointer))
            .collect()
    }

    /// Pack the static attributes for a one-shot instance-buffer upload.
    pub fn instance_data(&self) -> Vec<ParticleInstance> {
        (0..self.len())
            .map(|i| ParticleInstance {
                position: self.positions[i].to_array(),
                size: self.sizes[i],
                seed: self.seeds[i].to_array(),
                _pad: 0.0,
                color: [self.colors[i][0], self.colors[i][1], self.colors[i][2], 1.0],
            })
            .collect()
    }
}

/// Parameters handed to the renderer for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    pub elapsed_seconds: f32,
    pub pointer: PointerState,
}

/// Lifecycle wrapper: owns the field, the transient pointer state, and the
/// animation clock.
///
/// After [`teardown`](FieldAnimator::teardown) every operation is a no-op and
/// [`frame`](FieldAnimator::frame) stops yielding parameters, which is the
/// signal for the caller to stop scheduling display callbacks.
pub struct FieldAnimator {
    field: ParticleField,
    pointer: PointerState,
    elapsed: f32,
    active: bool,
}

impl FieldAnimator {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            pointer: PointerState::default(),
            elapsed: 0.0,
            active: true,
        }
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Update the transient pointer state from normalized device
    /// coordinates. Ignored unless the field is hover-reactive and the
    /// animator is still live. O(1), allocation-free.
    #[inline]
    pub fn on_pointer_move(&mut self, nx: f32, ny: f32) {
        if !self.active || !self.field.config().hover_reactive {
            return;
        }
        self.pointer = PointerState { x: nx, y: ny };
    }

    /// Advance the animation clock by `dt` seconds; `None` once torn down.
    pub fn frame(&mut self, dt: f32) -> Option<FrameParams> {
        if !self.active {
            return None;
        }
        self.elapsed += dt.max(0.0);
        Some(FrameParams {
            elapsed_seconds: self.elapsed,
            pointer: self.pointer,
        })
    }

    /// Stop the animation. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.active = false;
    }
}
