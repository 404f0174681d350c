//! Stress model: a bounded [0,1] scalar driven by a hold gesture.
//!
//! Rise and decay are pure functions of wall-clock elapsed time so the model
//! stays frame-rate independent and testable with simulated instants.

use std::time::Instant;

/// Time for stress to climb from empty to full while holding.
pub const RISE_MS: f32 = 6000.0;
/// Time for stress to ease back to zero after release.
pub const DECAY_MS: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Rising { since: Instant },
    Decaying { since: Instant, from: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct StressModel {
    value: f32,
    phase: Phase,
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

impl StressModel {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            phase: Phase::Idle,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// True while a rise or decay still needs per-frame sampling.
    pub fn is_active(&self) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::Rising { .. } => self.value < 1.0,
            Phase::Decaying { .. } => true,
        }
    }

    /// Begin the rise phase. Overrides any in-flight decay.
    pub fn start_hold(&mut self, now: Instant) {
        self.phase = Phase::Rising { since: now };
    }

    /// Begin decaying from the current value. Ignored unless a rise is
    /// active, so duplicate release events stay no-ops.
    pub fn stop_hold(&mut self, now: Instant) {
        if let Phase::Rising { .. } = self.phase {
            self.phase = Phase::Decaying {
                since: now,
                from: self.value,
            };
        }
    }

    /// Force the model back to zero, cancelling any active phase.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.phase = Phase::Idle;
    }

    /// Advance the active phase to `now`. Returns true when the value moved.
    pub fn sample(&mut self, now: Instant) -> bool {
        let previous = self.value;
        match self.phase {
            Phase::Idle => {}
            Phase::Rising { since } => {
                let elapsed_ms = now.duration_since(since).as_secs_f32() * 1000.0;
                self.value = (elapsed_ms / RISE_MS).min(1.0);
            }
            Phase::Decaying { since, from } => {
                let elapsed_ms = now.duration_since(since).as_secs_f32() * 1000.0;
                let tau = (elapsed_ms / DECAY_MS).clamp(0.0, 1.0);
                self.value = from * (1.0 - ease_out_cubic(tau));
                if tau >= 1.0 {
                    self.value = 0.0;
                    self.phase = Phase::Idle;
                }
            }
        }
        self.value != previous
    }
}

impl Default for StressModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_rise_is_linear_in_elapsed_time() {
        let t0 = Instant::now();
        let mut stress = StressModel::new();
        stress.start_hold(t0);

        stress.sample(t0 + ms(1500));
        assert!((stress.value() - 0.25).abs() < 1e-3);

        stress.sample(t0 + ms(3000));
        assert!((stress.value() - 0.5).abs() < 1e-3);

        stress.sample(t0 + ms(6000));
        assert_eq!(stress.value(), 1.0);

        // Saturates; further holding does not move it.
        assert!(!stress.sample(t0 + ms(9000)));
        assert_eq!(stress.value(), 1.0);
    }

    #[test]
    fn test_decay_reaches_zero_exactly() {
        let t0 = Instant::now();
        let mut stress = StressModel::new();
        stress.start_hold(t0);
        stress.sample(t0 + ms(3000));
        stress.stop_hold(t0 + ms(3000));

        stress.sample(t0 + ms(3400));
        assert_eq!(stress.value(), 0.0);
        assert!(!stress.is_active());
    }

    #[test]
    fn test_decay_follows_cubic_ease_out() {
        let t0 = Instant::now();
        let mut stress = StressModel::new();
        stress.start_hold(t0);
        stress.sample(t0 + ms(3000));
        let v0 = stress.value();
        stress.stop_hold(t0 + ms(3000));

        // Halfway through the decay window: tau = 0.5.
        stress.sample(t0 + ms(3200));
        let expected = v0 * (1.0 - (1.0 - (1.0f32 - 0.5).powi(3)));
        assert!((stress.value() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_new_hold_overrides_decay() {
        let t0 = Instant::now();
        let mut stress = StressModel::new();
        stress.start_hold(t0);
        stress.sample(t0 + ms(3000));
        stress.stop_hold(t0 + ms(3000));
        stress.sample(t0 + ms(3100));
        assert!(stress.value() > 0.0);

        // Re-press mid-decay: the rise restarts from its own clock.
        stress.start_hold(t0 + ms(3100));
        stress.sample(t0 + ms(3100) + ms(600));
        assert!((stress.value() - 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_stop_without_hold_is_noop() {
        let t0 = Instant::now();
        let mut stress = StressModel::new();
        stress.stop_hold(t0);
        assert!(!stress.is_active());
        assert!(!stress.sample(t0 + ms(100)));
    }

    #[test]
    fn test_reset_interrupts_any_phase() {
        let t0 = Instant::now();
        let mut stress = StressModel::new();
        stress.start_hold(t0);
        stress.sample(t0 + ms(2000));
        stress.reset();

        assert_eq!(stress.value(), 0.0);
        assert!(!stress.is_active());
        assert!(!stress.sample(t0 + ms(4000)));
    }
}
