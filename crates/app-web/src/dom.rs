//! DOM helpers: canvas sizing, scroll metrics, and decorative-layer updates.

use app_core::{css_hex, scroll_fraction, SceneSnapshot};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Normalized scroll progress of the page, in [0, 1].
pub fn raw_scroll_progress(window: &web::Window) -> f32 {
    let offset = window.page_y_offset().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_fraction(offset, document_height, viewport)
}

/// Push the derived snapshot into the page's decorative layers.
///
/// The palette fans out as CSS custom properties on the root element so the
/// sky/cloud/sun layers can be plain CSS; the opacity-gated and transformed
/// layers are addressed by id and skipped when the page doesn't carry them.
pub fn apply_snapshot(document: &web::Document, snapshot: &SceneSnapshot) {
    if let Some(root) = document.document_element() {
        if let Ok(el) = root.dyn_into::<web::HtmlElement>() {
            let style = el.style();
            let p = &snapshot.palette;
            _ = style.set_property("--background-color", &css_hex(p.background));
            _ = style.set_property("--sky-color", &css_hex(p.sky));
            _ = style.set_property("--cloud-color", &css_hex(p.cloud));
            _ = style.set_property("--cloud-shadow-color", &css_hex(p.cloud_shadow));
            _ = style.set_property("--sun-color", &css_hex(p.sun));
            _ = style.set_property("--sun-glare-color", &css_hex(p.sun_glare));
            _ = style.set_property("--sunlight-color", &css_hex(p.sunlight));
        }
    }
    set_style(
        document,
        "star-layer",
        "opacity",
        &format!("{:.4}", snapshot.star_layer_opacity),
    );
    set_style(
        document,
        "hero-area",
        "transform",
        &format!("translateY({:.1}px)", snapshot.parallax_y),
    );
    set_style(
        document,
        "progress-bar",
        "transform",
        &format!("scaleX({:.4})", snapshot.progress_scale),
    );
}

fn set_style(document: &web::Document, id: &str, prop: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            _ = el.style().set_property(prop, value);
        }
    }
}
