//! Pointer gesture tracking: tap-vs-drag classification and vertical
//! drag deltas for the scale scrubber.

use egui::Pos2;
use std::time::{Duration, Instant};

/// Motion of at least this many pixels on either axis confirms a drag.
pub const DRAG_DEADZONE_PX: f32 = 8.0;
/// Press-to-release under this duration (with no confirmed motion) is a tap.
pub const TAP_MAX: Duration = Duration::from_millis(260);

/// How a finished gesture classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    Tap,
    Drag,
}

/// A confirmed drag step.
#[derive(Debug, Clone, Copy)]
pub struct DragStep {
    /// Vertical pointer delta in pixels since the last confirmed sample.
    pub dy: f32,
    /// True on the sample that first crossed the deadzone.
    pub just_confirmed: bool,
}

/// Tracks one pointer interaction from press to release.
///
/// The reference y only advances on confirmed samples, so the step that
/// crosses the deadzone carries the full delta accumulated since the press.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    active: bool,
    press_pos: Pos2,
    press_at: Instant,
    last_y: f32,
    confirmed: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self {
            active: false,
            press_pos: Pos2::ZERO,
            press_at: Instant::now(),
            last_y: 0.0,
            confirmed: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, pos: Pos2, now: Instant) {
        self.active = true;
        self.press_pos = pos;
        self.press_at = now;
        self.last_y = pos.y;
        self.confirmed = false;
    }

    /// Feed a pointer sample. Returns a step once the gesture has crossed
    /// the deadzone; sub-deadzone motion produces nothing.
    pub fn motion(&mut self, pos: Pos2) -> Option<DragStep> {
        if !self.active {
            return None;
        }
        let mut just_confirmed = false;
        if !self.confirmed {
            let moved = (pos.x - self.press_pos.x).abs() >= DRAG_DEADZONE_PX
                || (pos.y - self.press_pos.y).abs() >= DRAG_DEADZONE_PX;
            if !moved {
                return None;
            }
            self.confirmed = true;
            just_confirmed = true;
        }
        let dy = pos.y - self.last_y;
        self.last_y = pos.y;
        Some(DragStep { dy, just_confirmed })
    }

    /// End the interaction and classify it.
    pub fn finish(&mut self, now: Instant) -> Option<GestureEnd> {
        if !self.active {
            return None;
        }
        self.active = false;
        let is_tap = !self.confirmed && now.duration_since(self.press_at) < TAP_MAX;
        Some(if is_tap {
            GestureEnd::Tap
        } else {
            GestureEnd::Drag
        })
    }
}

impl Default for DragTracker {
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

    #[test]
    fn test_motion_inside_deadzone_produces_nothing() {
        let t0 = Instant::now();
        let mut drag = DragTracker::new();
        drag.begin(Pos2::new(100.0, 200.0), t0);

        assert!(drag.motion(Pos2::new(104.0, 204.0)).is_none());
        assert!(drag.motion(Pos2::new(100.0, 207.0)).is_none());
    }

    #[test]
    fn test_first_confirmed_step_carries_delta_from_press() {
        let t0 = Instant::now();
        let mut drag = DragTracker::new();
        drag.begin(Pos2::new(100.0, 200.0), t0);

        // Wiggle inside the deadzone first; the reference y must not move.
        assert!(drag.motion(Pos2::new(100.0, 206.0)).is_none());

        let step = drag.motion(Pos2::new(100.0, 230.0)).unwrap();
        assert!(step.just_confirmed);
        assert_eq!(step.dy, 30.0);

        let step = drag.motion(Pos2::new(100.0, 240.0)).unwrap();
        assert!(!step.just_confirmed);
        assert_eq!(step.dy, 10.0);
    }

    #[test]
    fn test_horizontal_motion_also_confirms() {
        let t0 = Instant::now();
        let mut drag = DragTracker::new();
        drag.begin(Pos2::new(100.0, 200.0), t0);

        let step = drag.motion(Pos2::new(120.0, 201.0)).unwrap();
        assert!(step.just_confirmed);
        assert_eq!(step.dy, 1.0);
    }

    #[test]
    fn test_quick_still_release_is_a_tap() {
        let t0 = Instant::now();
        let mut drag = DragTracker::new();
        drag.begin(Pos2::new(50.0, 50.0), t0);
        drag.motion(Pos2::new(53.0, 52.0));

        assert_eq!(drag.finish(t0 + ms(100)), Some(GestureEnd::Tap));
        assert!(!drag.is_active());
    }

    #[test]
    fn test_slow_release_is_a_drag() {
        let t0 = Instant::now();
        let mut drag = DragTracker::new();
        drag.begin(Pos2::new(50.0, 50.0), t0);

        assert_eq!(drag.finish(t0 + ms(260)), Some(GestureEnd::Drag));
    }

    #[test]
    fn test_moved_release_is_a_drag_even_when_quick() {
        let t0 = Instant::now();
        let mut drag = DragTracker::new();
        drag.begin(Pos2::new(50.0, 50.0), t0);
        drag.motion(Pos2::new(50.0, 70.0));

        assert_eq!(drag.finish(t0 + ms(100)), Some(GestureEnd::Drag));
    }

    #[test]
    fn test_finish_without_begin_is_none() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.finish(Instant::now()), None);
    }
}
