//! Backdrop configuration parsed from a plain JS options object.

use app_core::FieldConfig;
use wasm_bindgen::prelude::*;

/// Read the backdrop options (`particleCount`, `particleSpread`, `speed`,
/// `particleColors`, `particleBaseSize`, `moveParticlesOnHover`,
/// `alphaParticles`, `disableRotation`) from a JS object. Missing keys keep
/// their defaults; malformed values are skipped.
pub fn field_config_from_js(value: &JsValue) -> FieldConfig {
    let mut config = FieldConfig::default();

    if !value.is_object() {
        return config;
    }

    macro_rules! extract_num {
        ($field:ident, $key:expr, $ty:ty) => {
            if let Ok(v) = js_sys::Reflect::get(value, &$key.into()) {
                if let Some(num) = v.as_f64() {
                    config.$field = num as $ty;
                }
            }
        };
    }
    macro_rules! extract_bool {
        ($field:ident, $key:expr) => {
            if let Ok(v) = js_sys::Reflect::get(value, &$key.into()) {
                if let Some(b) = v.as_bool() {
                    config.$field = b;
                }
            }
        };
    }

    extract_num!(particle_count, "particleCount", u32);
    extract_num!(spread, "particleSpread", f32);
    extract_num!(speed, "speed", f32);
    extract_num!(base_size, "particleBaseSize", f32);
    extract_bool!(hover_reactive, "moveParticlesOnHover");
    extract_bool!(alpha_blending, "alphaParticles");
    extract_bool!(disable_rotational_drift, "disableRotation");

    if let Ok(colors_val) = js_sys::Reflect::get(value, &"particleColors".into()) {
        if js_sys::Array::is_array(&colors_val) {
            let arr: js_sys::Array = colors_val.into();
            let hex: Vec<String> = arr.iter().filter_map(|v| v.as_string()).collect();
            let refs: Vec<&str> = hex.iter().map(|s| s.as_str()).collect();
            if let Err(e) = config.set_hex_palette(&refs) {
                log::warn!("[config] ignoring particleColors: {e}");
            }
        }
    }

    config
}
