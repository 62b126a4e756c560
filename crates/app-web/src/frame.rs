//! Frame loop driven by requestAnimationFrame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::{CursorTrail, FieldAnimator, ParticleField, SceneController, TRAIL_TICK_SEC};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext {
    pub animator: Rc<RefCell<FieldAnimator>>,
    pub controller: Rc<RefCell<SceneController>>,
    pub trail: Rc<RefCell<CursorTrail>>,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    pub trail_accum: f32,
}

impl FrameContext {
    /// One display frame. Returns false once the backdrop is torn down or
    /// rendering failed, which stops the loop.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Pointer/scroll input recorded since the previous frame is already
        // in the animator and controller; fold it in before any GPU work.
        let params = match self.animator.borrow_mut().frame(dt_sec) {
            Some(p) => p,
            None => return false,
        };
        let snapshot = self.controller.borrow_mut().tick(dt_sec);

        self.trail_accum += dt_sec;
        while self.trail_accum >= TRAIL_TICK_SEC {
            self.trail.borrow_mut().decay();
            self.trail_accum -= TRAIL_TICK_SEC;
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&params, &snapshot) {
                // A surface error stops this component's animation; it must
                // never unwind into the hosting page.
                log::error!("render error: {:?}", e);
                self.animator.borrow_mut().teardown();
                return false;
            }
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field).await {
        Ok(g) => Some(g),
        Err(e) => {
            // Degrades to an empty backdrop; the page keeps working.
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Start the self-rescheduling frame loop. Returns the cell holding the most
/// recent requestAnimationFrame id so teardown can cancel a pending wake-up;
/// once `frame` reports false the loop stops rescheduling on its own.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> Rc<Cell<i32>> {
    let raf_id: Rc<Cell<i32>> = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_id_inner = raf_id.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_inner.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
    raf_id
}
