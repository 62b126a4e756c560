use thiserror::Error;

/// Invalid construction parameters. Fatal to initialization; reported to the
/// caller, never swallowed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("particle count must be positive")]
    ZeroParticleCount,
    #[error("spread must be positive, got {0}")]
    NonPositiveSpread(f32),
    #[error("base size must be positive, got {0}")]
    NonPositiveBaseSize(f32),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("malformed hex color {0:?}")]
    BadColor(String),
}
