// Shared visual tuning constants used by both web and native frontends.

// Camera; points keep a constant apparent size because the projected pixel
// size divides by view depth (see shaders/points.wgsl).
pub const CAMERA_FOV_DEG: f32 = 15.0;
pub const CAMERA_Z: f32 = 15.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

// Per-axis drift amplitude (world units)
pub const DRIFT_AMP_XY: f32 = 0.1;
pub const DRIFT_AMP_Z: f32 = 0.05;

// Hover nudge toward the pointer
pub const HOVER_OFFSET_SCALE: f32 = 0.3;
pub const HOVER_DAMP_SPAN: f32 = 0.5; // per-particle damping lands in [0.5, 1.0]

// Projected point sizing: size * (base / 1000) * (300 / view depth)
pub const POINT_SIZE_DIVISOR: f32 = 1000.0;
pub const POINT_PERSPECTIVE_SCALE: f32 = 300.0;

// Per-particle shading
pub const ALPHA_BASE: f32 = 0.3;
pub const ALPHA_SPAN: f32 = 0.7;
pub const CENTER_BRIGHTEN_MAX: f32 = 0.5;

// Particle size attribute range
pub const SIZE_MIN: f32 = 0.5;
pub const SIZE_SPAN: f32 = 0.5;

// Scroll smoothing spring
pub const SCROLL_STIFFNESS: f32 = 100.0;
pub const SCROLL_DAMPING: f32 = 30.0;
pub const SPRING_MAX_DT: f32 = 0.05; // integrator step cap (seconds)

// Scene derivation
pub const STAR_FADE_START: f32 = 0.5;
pub const STAR_FADE_END: f32 = 1.0;
pub const PARALLAX_MAX_PX: f32 = -500.0;

// Cursor trail
pub const TRAIL_CAPACITY: usize = 20;
pub const TRAIL_OPACITY_DECAY: f32 = 0.08;
pub const TRAIL_SCALE_DECAY: f32 = 0.05;
pub const TRAIL_TICK_SEC: f32 = 0.03;

// Default field configuration (the backdrop the site ships with)
pub const DEFAULT_PARTICLE_COUNT: u32 = 800;
pub const DEFAULT_SPREAD: f32 = 18.0;
pub const DEFAULT_SPEED: f32 = 0.3;
pub const DEFAULT_BASE_SIZE: f32 = 150.0;
pub const DEFAULT_PALETTE: [u32; 3] = [0xf28fff, 0xffffff, 0xc9a0ff];
