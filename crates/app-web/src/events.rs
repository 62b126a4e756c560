//! Event wiring with scoped subscriptions.
//!
//! Handlers are O(1): they record the latest pointer/scroll state and return.
//! All derived work happens on the next frame tick.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{CursorTrail, FieldAnimator, PointerState, SceneController};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Event listeners acquired for the lifetime of one backdrop.
///
/// `clear` (also run on drop) detaches every callback, so listeners are
/// released on all exit paths, including teardown before the first frame.
#[derive(Default)]
pub struct Subscriptions {
    entries: Vec<(
        web::EventTarget,
        &'static str,
        Closure<dyn FnMut(web::Event)>,
    )>,
}

impl Subscriptions {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("[events] failed to attach {event} listener");
            return;
        }
        self.entries.push((target.clone(), event, closure));
    }

    pub fn clear(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.clear();
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub animator: Rc<RefCell<FieldAnimator>>,
    pub controller: Rc<RefCell<SceneController>>,
    pub trail: Rc<RefCell<CursorTrail>>,
}

pub fn wire_input_handlers(subs: &mut Subscriptions, w: &InputWiring) {
    wire_pointermove(subs, w);
    wire_scroll(subs, w);
    wire_resize(subs, w);
}

fn wire_pointermove(subs: &mut Subscriptions, w: &InputWiring) {
    let Some(window) = web::window() else { return };
    let canvas = w.canvas.clone();
    let animator = w.animator.clone();
    let trail = w.trail.clone();
    subs.add(window.as_ref(), "pointermove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        let ndc = PointerState::from_viewport_px(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        animator.borrow_mut().on_pointer_move(ndc.x, ndc.y);
        trail
            .borrow_mut()
            .push(ev.client_x() as f32, ev.client_y() as f32);
    });
}

fn wire_scroll(subs: &mut Subscriptions, w: &InputWiring) {
    let Some(window) = web::window() else { return };
    let controller = w.controller.clone();
    let win = window.clone();
    subs.add(window.as_ref(), "scroll", move |_ev: web::Event| {
        controller
            .borrow_mut()
            .set_progress(dom::raw_scroll_progress(&win));
    });
}

fn wire_resize(subs: &mut Subscriptions, w: &InputWiring) {
    let Some(window) = web::window() else { return };
    let canvas = w.canvas.clone();
    subs.add(window.as_ref(), "resize", move |_ev: web::Event| {
        // The frame tick picks the new backing size up via resize_if_needed.
        dom::sync_canvas_backing_size(&canvas);
    });
}
