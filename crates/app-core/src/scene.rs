//! Scroll-driven scene controller: derives the visual parameter snapshot
//! from smoothed progress and fans it out to subscribers.

use fnv::FnvHashMap;

use crate::color::{EnvironmentPalette, SUNRISE, SUNSET};
use crate::constants::{PARALLAX_MAX_PX, STAR_FADE_END, STAR_FADE_START};
use crate::scroll::{ramp, Spring};

/// Derived visual parameters for one value of the smoothed progress.
///
/// Everything here is a pure function of `progress`; re-deriving with the
/// same input always yields the same snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSnapshot {
    pub progress: f32,
    pub palette: EnvironmentPalette,
    /// Star layer fades in over the second half of the scroll range.
    pub star_layer_opacity: f32,
    /// Hero parallax offset in CSS pixels (negative: drifts up).
    pub parallax_y: f32,
    /// Scale factor for the page progress bar.
    pub progress_scale: f32,
}

impl SceneSnapshot {
    pub fn derive(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            progress: p,
            palette: EnvironmentPalette::blend(&SUNRISE, &SUNSET, p),
            star_layer_opacity: ramp(p, STAR_FADE_START, STAR_FADE_END),
            parallax_y: PARALLAX_MAX_PX * p,
            progress_scale: p,
        }
    }
}

/// Listener handle returned by [`SceneController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SceneSnapshot)>;

/// Single source of time-varying scroll state.
///
/// Event handlers feed the raw progress target; the frame tick steps the
/// smoothing spring, derives the snapshot once, and pushes it to every
/// subscriber. Only the latest snapshot is retained, never a history.
pub struct SceneController {
    spring: Spring,
    listeners: FnvHashMap<u64, Listener>,
    next_id: u64,
    latest: SceneSnapshot,
}

impl SceneController {
    pub fn new() -> Self {
        Self {
            spring: Spring::new(0.0),
            listeners: FnvHashMap::default(),
            next_id: 0,
            latest: SceneSnapshot::derive(0.0),
        }
    }

    /// Feed the raw scroll progress. O(1), allocation-free; safe to call
    /// from an event handler at any rate.
    #[inline]
    pub fn set_progress(&mut self, raw: f32) {
        self.spring.set_target(raw.clamp(0.0, 1.0));
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    #[inline]
    pub fn latest(&self) -> &SceneSnapshot {
        &self.latest
    }

    /// Step the smoothing spring, re-derive the snapshot, and fan it out.
    /// Returns the snapshot for the caller's own use.
    pub fn tick(&mut self, dt: f32) -> SceneSnapshot {
        let p = self.spring.step(dt);
        self.latest = SceneSnapshot::derive(p);
        let snapshot = self.latest;
        for listener in self.listeners.values_mut() {
            listener(&snapshot);
        }
        snapshot
    }

    /// Skip the smoothing lag, e.g. when restoring a saved scroll position.
    pub fn snap(&mut self) {
        self.spring.snap_to_target();
        self.latest = SceneSnapshot::derive(self.spring.value());
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SceneSnapshot) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        SubscriptionId(id)
    }

    /// Remove a listener; unknown ids are ignored. A removed listener is
    /// never invoked again.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.remove(&id.0);
    }

    /// Drop every listener (teardown path).
    pub fn clear_subscribers(&mut self) {
        self.listeners.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new()
    }
}
