//! Packed-color interpolation and the day-cycle environment palette.

use crate::error::ConfigError;

/// Linear interpolation between two packed `0xRRGGBB` colors.
///
/// Each channel is interpolated independently, rounded to the nearest
/// integer, and clamped to [0, 255]. `t` is clamped to [0, 1] so callers can
/// feed raw progress values without pre-conditioning.
#[inline]
pub fn lerp_color(c1: u32, c2: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u32, b: u32| -> u32 {
        let v = a as f32 + (b as f32 - a as f32) * t;
        (v.round() as i32).clamp(0, 255) as u32
    };
    let r = channel((c1 >> 16) & 0xff, (c2 >> 16) & 0xff);
    let g = channel((c1 >> 8) & 0xff, (c2 >> 8) & 0xff);
    let b = channel(c1 & 0xff, c2 & 0xff);
    (r << 16) | (g << 8) | b
}

/// Split a packed `0xRRGGBB` color into [0, 1] RGB components.
#[inline]
pub fn unpack_rgb(c: u32) -> [f32; 3] {
    [
        ((c >> 16) & 0xff) as f32 / 255.0,
        ((c >> 8) & 0xff) as f32 / 255.0,
        (c & 0xff) as f32 / 255.0,
    ]
}

/// Format a packed color as a CSS `#rrggbb` string.
#[inline]
pub fn css_hex(c: u32) -> String {
    format!("#{:06x}", c & 0xff_ffff)
}

/// Parse a `"#rrggbb"` string (case-insensitive) into a packed color.
pub fn parse_hex_color(s: &str) -> Result<u32, ConfigError> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| ConfigError::BadColor(s.to_string()))?;
    if hex.len() != 6 {
        return Err(ConfigError::BadColor(s.to_string()));
    }
    u32::from_str_radix(hex, 16).map_err(|_| ConfigError::BadColor(s.to_string()))
}

/// Named environment colors pushed into the decorative sky/cloud/sun layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentPalette {
    pub background: u32,
    pub sky: u32,
    pub cloud: u32,
    pub cloud_shadow: u32,
    pub sun: u32,
    pub sun_glare: u32,
    pub sunlight: u32,
}

/// Start-of-day palette (progress 0).
pub const SUNRISE: EnvironmentPalette = EnvironmentPalette {
    background: 0x89f0d1,
    sky: 0x0dbff7,
    cloud: 0xdbadde,
    cloud_shadow: 0x631f82,
    sun: 0xff9919,
    sun_glare: 0xffb632,
    sunlight: 0xfff231,
};

/// End-of-day palette (progress 1).
pub const SUNSET: EnvironmentPalette = EnvironmentPalette {
    background: 0x89f0d1,
    sky: 0x0a13aa,
    cloud: 0xcd78d7,
    cloud_shadow: 0x2e24f2,
    sun: 0xffffff,
    sun_glare: 0xfcfcfc,
    sunlight: 0xfcfcfc,
};

impl EnvironmentPalette {
    /// Field-wise blend between two palettes.
    pub fn blend(a: &Self, b: &Self, t: f32) -> Self {
        Self {
            background: lerp_color(a.background, b.background, t),
            sky: lerp_color(a.sky, b.sky, t),
            cloud: lerp_color(a.cloud, b.cloud, t),
            cloud_shadow: lerp_color(a.cloud_shadow, b.cloud_shadow, t),
            sun: lerp_color(a.sun, b.sun, t),
            sun_glare: lerp_color(a.sun_glare, b.sun_glare, t),
            sunlight: lerp_color(a.sunlight, b.sunlight, t),
        }
    }
}
