pub mod color;
pub mod constants;
pub mod error;
pub mod field;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod trail;

// Shader bundled as a string constant, shared by both frontends
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use color::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use pointer::*;
pub use scene::*;
pub use scroll::*;
pub use trail::*;
