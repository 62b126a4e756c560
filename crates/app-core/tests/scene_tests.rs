// Host-side tests for snapshot derivation and the scene controller's
// subscription fan-out.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{SceneController, SceneSnapshot, SUNRISE, SUNSET};

#[test]
fn derive_is_pure() {
    assert_eq!(SceneSnapshot::derive(0.42), SceneSnapshot::derive(0.42));
}

#[test]
fn derive_endpoints_use_the_preset_palettes() {
    let top = SceneSnapshot::derive(0.0);
    assert_eq!(top.palette, SUNRISE);
    assert_eq!(top.star_layer_opacity, 0.0);
    assert_eq!(top.parallax_y, 0.0);
    assert_eq!(top.progress_scale, 0.0);

    let bottom = SceneSnapshot::derive(1.0);
    assert_eq!(bottom.palette, SUNSET);
    assert_eq!(bottom.star_layer_opacity, 1.0);
    assert_eq!(bottom.parallax_y, -500.0);
    assert_eq!(bottom.progress_scale, 1.0);
}

#[test]
fn derive_star_layer_gates_at_half_scroll() {
    assert_eq!(SceneSnapshot::derive(0.3).star_layer_opacity, 0.0);
    assert_eq!(SceneSnapshot::derive(0.5).star_layer_opacity, 0.0);
    assert_eq!(SceneSnapshot::derive(0.75).star_layer_opacity, 0.5);
}

#[test]
fn derive_clamps_progress() {
    assert_eq!(SceneSnapshot::derive(-0.5), SceneSnapshot::derive(0.0));
    assert_eq!(SceneSnapshot::derive(7.0), SceneSnapshot::derive(1.0));
}

#[test]
fn controller_clamps_the_raw_target() {
    let mut controller = SceneController::new();
    controller.set_progress(2.5);
    assert_eq!(controller.target(), 1.0);
    controller.set_progress(-1.0);
    assert_eq!(controller.target(), 0.0);
}

#[test]
fn controller_settles_on_the_target() {
    let mut controller = SceneController::new();
    controller.set_progress(1.0);
    let mut last = controller.tick(1.0 / 60.0);
    for _ in 0..600 {
        last = controller.tick(1.0 / 60.0);
    }
    assert!((last.progress - 1.0).abs() < 1e-3);
    assert_eq!(&last, controller.latest());
}

#[test]
fn controller_snap_skips_the_smoothing_lag() {
    let mut controller = SceneController::new();
    controller.set_progress(0.6);
    controller.snap();
    assert!((controller.latest().progress - 0.6).abs() < 1e-6);
}

#[test]
fn subscribers_receive_every_tick_until_unsubscribed() {
    let mut controller = SceneController::new();
    let seen: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = seen.clone();
    let id = controller.subscribe(move |snap| sink.borrow_mut().push(snap.progress));
    assert_eq!(controller.subscriber_count(), 1);

    controller.set_progress(1.0);
    controller.tick(1.0 / 60.0);
    controller.tick(1.0 / 60.0);
    assert_eq!(seen.borrow().len(), 2);

    controller.unsubscribe(id);
    controller.tick(1.0 / 60.0);
    assert_eq!(
        seen.borrow().len(),
        2,
        "an unsubscribed listener must never fire again"
    );
}

#[test]
fn clear_subscribers_detaches_everything() {
    let mut controller = SceneController::new();
    let hits = Rc::new(RefCell::new(0u32));
    for _ in 0..3 {
        let sink = hits.clone();
        controller.subscribe(move |_| *sink.borrow_mut() += 1);
    }
    controller.tick(1.0 / 60.0);
    assert_eq!(*hits.borrow(), 3);

    controller.clear_subscribers();
    assert_eq!(controller.subscriber_count(), 0);
    controller.tick(1.0 / 60.0);
    assert_eq!(*hits.borrow(), 3);
}
