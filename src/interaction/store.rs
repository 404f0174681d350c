//! The single state container behind the whole app: interaction mode, scale
//! position, snapped anchor, environment, stress, hop token, and suit colors.
//!
//! Every timestamp is injected by the caller, so the machine runs on
//! simulated time in tests. Pending transitions (snap debounce, warp) are
//! explicit `Deferred` values fired from `tick`.

use std::time::{Duration, Instant};

use egui::Pos2;
use log::debug;

use crate::cosmos::{anchors, clamp01, Anchor, EnvField, EnvPatch, Environment};
use crate::interaction::gestures::{DragTracker, GestureEnd};
use crate::interaction::stress::StressModel;
use crate::interaction::timers::{fire_due, Deferred};
use crate::scene::palette::{SuitColors, SuitPatch};

/// Delay between a release and the snap to the nearest anchor. A new drag
/// inside this window cancels the pending snap.
pub const SNAP_DEBOUNCE: Duration = Duration::from_millis(180);
/// Length of the warp transition. Deterministic, not user-interruptible.
pub const WARP_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpMode {
    Scaling,
    Snapped,
    Warping,
    Arrived,
}

pub struct WarpStore {
    mode: WarpMode,
    scale: f32,
    snapped_anchor_id: Option<&'static str>,
    env: Environment,
    stress: StressModel,
    hop_token: u64,
    suit: SuitColors,
    drag: DragTracker,
    pending_snap: Option<Deferred>,
    pending_warp: Option<Deferred>,
    warp_target: Option<&'static str>,
    revision: u64,
}

impl WarpStore {
    /// Start snapped at the first catalog anchor with its environment.
    pub fn new() -> Self {
        let initial = anchors::first();
        Self {
            mode: WarpMode::Snapped,
            scale: initial.scale_position,
            snapped_anchor_id: Some(initial.id),
            env: initial.defaults,
            stress: StressModel::new(),
            hop_token: 0,
            suit: SuitColors::classic(),
            drag: DragTracker::new(),
            pending_snap: None,
            pending_warp: None,
            warp_target: None,
            revision: 0,
        }
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn mode(&self) -> WarpMode {
        self.mode
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn snapped_anchor_id(&self) -> Option<&'static str> {
        self.snapped_anchor_id
    }

    pub fn snapped_anchor(&self) -> Option<&'static Anchor> {
        self.snapped_anchor_id.and_then(anchors::by_id)
    }

    /// The anchor the UI should describe: the snapped one, or the nearest
    /// to the in-transit scale while scrubbing.
    pub fn active_anchor(&self) -> &'static Anchor {
        self.snapped_anchor()
            .unwrap_or_else(|| anchors::find_nearest(self.scale))
    }

    #[inline]
    pub fn env(&self) -> Environment {
        self.env
    }

    #[inline]
    pub fn stress(&self) -> f32 {
        self.stress.value()
    }

    #[inline]
    pub fn hop_token(&self) -> u64 {
        self.hop_token
    }

    #[inline]
    pub fn suit_colors(&self) -> &SuitColors {
        &self.suit
    }

    #[inline]
    pub fn drag_active(&self) -> bool {
        self.drag.is_active()
    }

    /// Monotone change counter; bumped on every observable mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    fn mark_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn set_scale(&mut self, value: f32) {
        self.scale = clamp01(value);
        self.mark_changed();
    }

    /// Pointer-down on the scene, outside any control surface.
    pub fn begin_drag(&mut self, pos: Pos2, now: Instant) {
        self.pending_snap = None;
        self.drag.begin(pos, now);
        if self.mode != WarpMode::Arrived {
            self.mode = WarpMode::Scaling;
            self.snapped_anchor_id = None;
        }
        self.mark_changed();
    }

    /// Pointer motion while a drag may be active. `viewport_height`
    /// normalizes the vertical delta to the full scale axis.
    pub fn move_drag(&mut self, pos: Pos2, viewport_height: f32) {
        let Some(step) = self.drag.motion(pos) else {
            return;
        };
        if step.just_confirmed {
            self.mode = WarpMode::Scaling;
            self.snapped_anchor_id = None;
        }
        self.scale = clamp01(self.scale - step.dy / viewport_height.max(1.0));
        self.mark_changed();
    }

    /// Pointer-up or pointer-cancel. Taps while arrived hop; everything
    /// else schedules the debounced snap.
    pub fn end_drag(&mut self, now: Instant) {
        let Some(end) = self.drag.finish(now) else {
            return;
        };
        if end == GestureEnd::Tap && self.mode == WarpMode::Arrived {
            self.hop_token += 1;
            debug!("hop triggered, token={}", self.hop_token);
            self.mark_changed();
            return;
        }
        self.pending_snap = Some(Deferred::after(now, SNAP_DEBOUNCE));
        self.mark_changed();
    }

    /// Begin the warp transition. Valid only when snapped to an anchor;
    /// otherwise a silent no-op.
    pub fn request_warp(&mut self, now: Instant) {
        if self.mode != WarpMode::Snapped {
            return;
        }
        let Some(id) = self.snapped_anchor_id else {
            return;
        };
        self.mode = WarpMode::Warping;
        self.warp_target = Some(id);
        self.pending_warp = Some(Deferred::after(now, WARP_DURATION));
        debug!("warp started toward {id}");
        self.mark_changed();
    }

    pub fn set_env(&mut self, patch: EnvPatch) {
        self.env.apply_patch(patch);
        self.mark_changed();
    }

    pub fn set_env_field(&mut self, field: EnvField, value: f32) {
        self.set_env(EnvPatch::single(field, value));
    }

    pub fn start_hold(&mut self, now: Instant) {
        self.stress.start_hold(now);
        self.mark_changed();
    }

    pub fn stop_hold(&mut self, now: Instant) {
        self.stress.stop_hold(now);
        self.mark_changed();
    }

    pub fn set_suit_colors(&mut self, patch: SuitPatch) {
        self.suit.apply(patch);
        self.mark_changed();
    }

    pub fn set_suit_colors_all(&mut self, colors: SuitColors) {
        self.suit = colors;
        self.mark_changed();
    }

    // ------------------------------------------------------------------
    // Frame tick
    // ------------------------------------------------------------------

    /// Advance pending timers and the stress model to `now`. Called once
    /// per frame, and with simulated instants in tests.
    pub fn tick(&mut self, now: Instant) {
        let mut changed = false;

        if fire_due(&mut self.pending_snap, now) {
            let nearest = anchors::find_nearest(self.scale);
            self.scale = nearest.scale_position;
            self.snapped_anchor_id = Some(nearest.id);
            self.mode = WarpMode::Snapped;
            debug!("snapped to {} at {}", nearest.id, nearest.scale_position);
            changed = true;
        }

        if fire_due(&mut self.pending_warp, now) {
            self.mode = WarpMode::Arrived;
            if let Some(anchor) = self.warp_target.take().and_then(anchors::by_id) {
                self.env.apply_anchor_defaults(anchor);
                debug!("arrived at {}", anchor.id);
            }
            self.stress.reset();
            changed = true;
        }

        if self.stress.is_active() && self.stress.sample(now) {
            changed = true;
        }

        if changed {
            self.mark_changed();
        }
    }
}

impl Default for WarpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    const VIEWPORT_H: f32 = 1000.0;

    /// Drag vertically so the scale lands on `target`, release, and let the
    /// snap debounce fire. Returns the time after the snap.
    fn drag_to_and_snap(store: &mut WarpStore, t0: Instant, target: f32) -> Instant {
        let dy = (store.scale() - target) * VIEWPORT_H;
        store.begin_drag(Pos2::new(200.0, 500.0), t0);
        store.move_drag(Pos2::new(200.0, 500.0 + dy), VIEWPORT_H);
        let released = t0 + ms(400);
        store.end_drag(released);
        let after = released + ms(181);
        store.tick(after);
        after
    }

    /// Snap to the moon then complete a warp there.
    fn arrive_at_moon(store: &mut WarpStore, t0: Instant) -> Instant {
        let snapped = drag_to_and_snap(store, t0, 0.36);
        assert_eq!(store.snapped_anchor_id(), Some("moon"));
        store.request_warp(snapped);
        let arrived = snapped + ms(600);
        store.tick(arrived);
        assert_eq!(store.mode(), WarpMode::Arrived);
        arrived
    }

    #[test]
    fn test_initial_state() {
        let store = WarpStore::new();
        assert_eq!(store.mode(), WarpMode::Snapped);
        assert_eq!(store.snapped_anchor_id(), Some("human-iss"));
        assert_eq!(store.scale(), 0.05);
        assert_eq!(store.stress(), 0.0);
        assert_eq!(store.hop_token(), 0);
    }

    #[test]
    fn test_set_scale_clamps() {
        let mut store = WarpStore::new();
        store.set_scale(-0.5);
        assert_eq!(store.scale(), 0.0);
        store.set_scale(1.7);
        assert_eq!(store.scale(), 1.0);
    }

    #[test]
    fn test_drag_release_snaps_to_nearest_anchor() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        drag_to_and_snap(&mut store, t0, 0.36);
        assert_eq!(store.snapped_anchor_id(), Some("moon"));

        // From the moon, scrub up to 0.56 and release (non-tap).
        let t1 = t0 + ms(5000);
        let dy = (store.scale() - 0.56) * VIEWPORT_H;
        store.begin_drag(Pos2::new(200.0, 600.0), t1);
        assert_eq!(store.mode(), WarpMode::Scaling);
        assert_eq!(store.snapped_anchor_id(), None);

        store.move_drag(Pos2::new(200.0, 600.0 + dy), VIEWPORT_H);
        assert!((store.scale() - 0.56).abs() < 1e-4);

        let released = t1 + ms(400);
        store.end_drag(released);
        assert_eq!(store.mode(), WarpMode::Scaling);

        // Debounce has not elapsed yet.
        store.tick(released + ms(179));
        assert_eq!(store.mode(), WarpMode::Scaling);

        store.tick(released + ms(180));
        assert_eq!(store.mode(), WarpMode::Snapped);
        assert_eq!(store.snapped_anchor_id(), Some("solar-system"));
        assert_eq!(store.scale(), 0.55);
    }

    #[test]
    fn test_new_drag_cancels_pending_snap() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        store.begin_drag(Pos2::new(100.0, 500.0), t0);
        store.move_drag(Pos2::new(100.0, 400.0), VIEWPORT_H);
        store.end_drag(t0 + ms(300));

        // New drag lands inside the debounce window.
        store.begin_drag(Pos2::new(100.0, 400.0), t0 + ms(350));
        store.tick(t0 + ms(600));
        assert_eq!(store.mode(), WarpMode::Scaling);
        assert_eq!(store.snapped_anchor_id(), None);
    }

    #[test]
    fn test_warp_sequence_applies_defaults_and_resets_stress() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        let snapped = drag_to_and_snap(&mut store, t0, 0.36);
        assert_eq!(store.snapped_anchor_id(), Some("moon"));

        // Leave stress mid-rise so arrival visibly resets it.
        store.start_hold(snapped);
        store.tick(snapped + ms(2000));
        assert!(store.stress() > 0.0);

        store.request_warp(snapped + ms(2000));
        assert_eq!(store.mode(), WarpMode::Warping);

        store.tick(snapped + ms(2000) + ms(599));
        assert_eq!(store.mode(), WarpMode::Warping);

        store.tick(snapped + ms(2000) + ms(600));
        assert_eq!(store.mode(), WarpMode::Arrived);
        assert_eq!(store.env().gravity, 1.62);
        assert_eq!(store.env().temperature_c, -20.0);
        assert_eq!(store.env().radiation, 0.45);
        assert_eq!(store.stress(), 0.0);
    }

    #[test]
    fn test_warp_requires_snapped_mode() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        store.begin_drag(Pos2::new(100.0, 500.0), t0);
        assert_eq!(store.mode(), WarpMode::Scaling);

        store.request_warp(t0 + ms(10));
        assert_eq!(store.mode(), WarpMode::Scaling);
        store.tick(t0 + ms(700));
        assert_ne!(store.mode(), WarpMode::Arrived);
    }

    #[test]
    fn test_double_warp_request_warps_once() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        store.request_warp(t0);
        assert_eq!(store.mode(), WarpMode::Warping);
        let revision = store.revision();

        // Second call fails the SNAPPED precondition and changes nothing.
        store.request_warp(t0 + ms(1));
        assert_eq!(store.revision(), revision);

        store.tick(t0 + ms(600));
        assert_eq!(store.mode(), WarpMode::Arrived);

        // No second arrival pending.
        let revision = store.revision();
        store.tick(t0 + ms(1300));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_tap_while_arrived_hops_without_mode_change() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        let arrived = arrive_at_moon(&mut store, t0);

        store.begin_drag(Pos2::new(300.0, 300.0), arrived + ms(100));
        store.move_drag(Pos2::new(303.0, 302.0), VIEWPORT_H);
        store.end_drag(arrived + ms(200));

        assert_eq!(store.mode(), WarpMode::Arrived);
        assert_eq!(store.hop_token(), 1);

        // No snap was scheduled by the hop.
        store.tick(arrived + ms(1000));
        assert_eq!(store.mode(), WarpMode::Arrived);
    }

    #[test]
    fn test_slow_press_while_arrived_takes_snap_path() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        let arrived = arrive_at_moon(&mut store, t0);

        store.begin_drag(Pos2::new(300.0, 300.0), arrived + ms(100));
        store.end_drag(arrived + ms(100) + ms(260));
        assert_eq!(store.hop_token(), 0);

        store.tick(arrived + ms(100) + ms(260) + ms(180));
        assert_eq!(store.mode(), WarpMode::Snapped);
        assert_eq!(store.snapped_anchor_id(), Some("moon"));
    }

    #[test]
    fn test_confirmed_drag_exits_arrived() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        let arrived = arrive_at_moon(&mut store, t0);

        store.begin_drag(Pos2::new(300.0, 300.0), arrived + ms(100));
        assert_eq!(store.mode(), WarpMode::Arrived);

        store.move_drag(Pos2::new(300.0, 350.0), VIEWPORT_H);
        assert_eq!(store.mode(), WarpMode::Scaling);
        assert_eq!(store.snapped_anchor_id(), None);
    }

    #[test]
    fn test_warp_timer_survives_interrupting_drag() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        store.request_warp(t0);

        store.begin_drag(Pos2::new(100.0, 500.0), t0 + ms(100));
        assert_eq!(store.mode(), WarpMode::Scaling);

        // The warp window is deterministic; it still completes.
        store.tick(t0 + ms(600));
        assert_eq!(store.mode(), WarpMode::Arrived);
    }

    #[test]
    fn test_stress_hold_and_release_through_store() {
        let mut store = WarpStore::new();
        let t0 = Instant::now();
        let arrived = arrive_at_moon(&mut store, t0);

        store.start_hold(arrived);
        store.tick(arrived + ms(3000));
        assert!((store.stress() - 0.5).abs() < 1e-3);

        store.stop_hold(arrived + ms(3000));
        store.tick(arrived + ms(3000) + ms(400));
        assert_eq!(store.stress(), 0.0);
    }
}
