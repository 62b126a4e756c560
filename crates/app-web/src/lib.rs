#![cfg(target_arch = "wasm32")]
//! WASM entry point: mounts the particle backdrop onto the page, wires the
//! scroll/pointer/resize inputs, and hands back a teardown handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::{CursorTrail, FieldAnimator, ParticleField, SceneController};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod dom;
mod events;
mod frame;
mod render;

const BACKDROP_CANVAS_ID: &str = "backdrop-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("duskfield starting");

    // Auto-mount with default options when the page carries the well-known
    // canvas; pages that want options call `mount` themselves.
    if let Some(doc) = dom::window_document() {
        if doc.get_element_by_id(BACKDROP_CANVAS_ID).is_some() {
            spawn_local(async move {
                match init(BACKDROP_CANVAS_ID, JsValue::UNDEFINED).await {
                    Ok(handle) => {
                        // The auto-mounted backdrop lives until page unload.
                        std::mem::forget(handle);
                    }
                    Err(e) => log::error!("init error: {:?}", e),
                }
            });
        }
    }
    Ok(())
}

/// Mount the backdrop onto the canvas with the given id. `options` is a plain
/// JS object in the shape described in [`config`]; pass `undefined` for the
/// defaults. The returned handle tears everything down again.
#[wasm_bindgen]
pub async fn mount(canvas_id: String, options: JsValue) -> Result<BackdropHandle, JsValue> {
    init(&canvas_id, options)
        .await
        .map_err(|e| JsValue::from_str(&format!("{e:?}")))
}

async fn init(canvas_id: &str, options: JsValue) -> anyhow::Result<BackdropHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let field_config = config::field_config_from_js(&options);
    let field = ParticleField::generate(field_config, entropy_seed())?;
    log::info!("[backdrop] mounted with {} particles", field.len());

    // GPU init may fail (no WebGPU); the backdrop then renders nothing.
    let gpu = frame::init_gpu(&canvas, &field).await;

    let animator = Rc::new(RefCell::new(FieldAnimator::new(field)));
    let controller = Rc::new(RefCell::new(SceneController::new()));
    let trail = Rc::new(RefCell::new(CursorTrail::new()));

    // Decorative layers follow the controller through an explicit
    // subscription; teardown clears it together with everything else.
    {
        let doc = document.clone();
        controller
            .borrow_mut()
            .subscribe(move |snapshot| dom::apply_snapshot(&doc, snapshot));
    }

    // Pick up the current scroll position without the smoothing lag.
    {
        let mut c = controller.borrow_mut();
        c.set_progress(dom::raw_scroll_progress(&window));
        c.snap();
    }

    let subs = Rc::new(RefCell::new(events::Subscriptions::default()));
    events::wire_input_handlers(
        &mut subs.borrow_mut(),
        &events::InputWiring {
            canvas: canvas.clone(),
            animator: animator.clone(),
            controller: controller.clone(),
            trail: trail.clone(),
        },
    );

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator,
        controller,
        trail,
        gpu,
        canvas,
        last_instant: Instant::now(),
        trail_accum: 0.0,
    }));
    let raf_id = frame::start_loop(ctx.clone());

    Ok(BackdropHandle { ctx, subs, raf_id })
}

fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => 0x6475_736b,
    }
}

/// Owner of one mounted backdrop.
#[wasm_bindgen]
pub struct BackdropHandle {
    ctx: Rc<RefCell<frame::FrameContext>>,
    subs: Rc<RefCell<events::Subscriptions>>,
    raf_id: Rc<Cell<i32>>,
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Stop the frame loop, detach every event listener, and release the GPU
    /// context. Safe to call more than once.
    pub fn teardown(&self) {
        {
            let mut ctx = self.ctx.borrow_mut();
            ctx.animator.borrow_mut().teardown();
            ctx.controller.borrow_mut().clear_subscribers();
            ctx.gpu = None;
        }
        self.subs.borrow_mut().clear();
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }

    /// Drive the controller from script instead of the page scroll, e.g. for
    /// virtual scrollers.
    pub fn set_scroll_progress(&self, raw: f32) {
        self.ctx
            .borrow()
            .controller
            .borrow_mut()
            .set_progress(raw);
    }

    /// Current smoothed scroll progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.ctx.borrow().controller.borrow().latest().progress
    }

    /// Flattened cursor-trail sprites as `[x, y, opacity, scale]` quads, for
    /// pages that render the stardust trail themselves.
    pub fn trail_snapshot(&self) -> js_sys::Float32Array {
        let ctx = self.ctx.borrow();
        let trail = ctx.trail.borrow();
        let mut flat = Vec::with_capacity(trail.len() * 4);
        for p in trail.points() {
            flat.extend_from_slice(&[p.x, p.y, p.opacity, p.scale]);
        }
        js_sys::Float32Array::from(flat.as_slice())
    }
}
