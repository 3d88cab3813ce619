//! Numeric count-up tween for stat values.
//!
//! Accumulates a fixed per-tick increment from 0 toward a target, displaying
//! the floored running value until the target is reached, then the exact
//! target. The tick period is a nominal 16 ms (≈60 steps/second), so the
//! tween terminates in `duration / 16` ticks.

/// Nominal tick period driving counter tweens.
pub const TICK_MS: u64 = 16;

/// Default count-up duration.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// What a single tick produced: the value to display, and whether the tween
/// has finished (display the exact target, stop ticking).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub display: u64,
    pub done: bool,
}

/// An in-flight count-up toward `target`.
#[derive(Debug, Clone)]
pub struct CounterTween {
    target: u64,
    increment: f64,
    ticks: u64,
    steps: u64,
    done: bool,
}

impl CounterTween {
    pub fn new(target: u64, duration_ms: u64) -> Self {
        let steps = (duration_ms.max(TICK_MS) / TICK_MS).max(1);
        Self {
            target,
            increment: target as f64 / steps as f64,
            ticks: 0,
            steps,
            done: false,
        }
    }

    /// Advance by one tick. Returns `None` once finished — a completed tween
    /// never produces further frames.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.done {
            return None;
        }
        self.ticks += 1;
        // Recompute from the tick index: summing the increment drifts (e.g.
        // 125 × 0.8 falls just short of 100.0) and would cost an extra tick.
        let value = self.increment * self.ticks as f64;
        if self.ticks >= self.steps || value >= self.target as f64 {
            self.done = true;
            Some(CounterFrame {
                display: self.target,
                done: true,
            })
        } else {
            Some(CounterFrame {
                display: value.floor() as u64,
                done: false,
            })
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_exact_target_within_expected_ticks() {
        let mut tween = CounterTween::new(100, 2000);
        let max_ticks = 2000_u64.div_ceil(TICK_MS);

        let mut last = 0u64;
        let mut ticks = 0u64;
        loop {
            ticks += 1;
            assert!(ticks <= max_ticks, "tween did not terminate in time");
            let frame = tween.tick().expect("tween ended early");
            // Non-decreasing integers, never past the target.
            assert!(frame.display >= last);
            assert!(frame.display <= 100);
            last = frame.display;
            if frame.done {
                break;
            }
        }
        assert_eq!(last, 100);
        assert!(tween.is_done());
    }

    #[test]
    fn terminates_on_exactly_the_final_step() {
        // 2000ms / 16ms = 125 steps: 124 running frames, done on the 125th.
        let mut tween = CounterTween::new(100, 2000);
        for _ in 0..124 {
            assert!(!tween.tick().expect("tween ended early").done);
        }
        let last = tween.tick().unwrap();
        assert!(last.done);
        assert_eq!(last.display, 100);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut tween = CounterTween::new(0, 2000);
        let frame = tween.tick().unwrap();
        assert_eq!(frame.display, 0);
        assert!(frame.done);
        assert_eq!(tween.tick(), None);
    }

    #[test]
    fn finished_tween_stays_silent() {
        let mut tween = CounterTween::new(3, 100);
        while let Some(frame) = tween.tick() {
            if frame.done {
                break;
            }
        }
        assert_eq!(tween.tick(), None);
        assert_eq!(tween.tick(), None);
    }

    #[test]
    fn never_overshoots_final_value() {
        // 7 doesn't divide evenly into the step count; the last frame must
        // still display exactly 7.
        let mut tween = CounterTween::new(7, 500);
        let mut final_display = 0;
        while let Some(frame) = tween.tick() {
            final_display = frame.display;
            if frame.done {
                break;
            }
        }
        assert_eq!(final_display, 7);
    }
}
