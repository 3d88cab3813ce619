//! Smooth scroll-to-section with exponential ease-out.
//!
//! When a nav link is activated, the scroll offset glides toward the target
//! instead of jumping: each tick closes a fixed fraction of the remaining
//! distance, giving visible deceleration, then snaps when within a pixel.

/// Pixels reserved for the fixed nav bar when jumping to a section.
pub const NAV_ALLOWANCE_PX: f64 = 80.0;

/// Scroll-offset glide animator.
#[derive(Debug, Clone)]
pub struct Glide {
    target: Option<f64>,
    /// Fraction of the remaining distance closed per tick.
    /// Good range: 0.25–0.45 at ~60 fps.
    speed: f64,
}

impl Glide {
    pub fn new(speed: f64) -> Self {
        Self {
            target: None,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Begin gliding toward `target` (clamped by the caller).
    pub fn start(&mut self, target: f64) {
        self.target = Some(target);
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Advance one tick from `current`. Returns the next scroll offset, or
    /// `None` when no glide is active. Snaps and finishes within a pixel.
    pub fn tick(&mut self, current: f64) -> Option<f64> {
        let target = self.target?;
        let next = current + (target - current) * self.speed;
        if (target - next).abs() < 1.0 {
            self.target = None;
            Some(target)
        } else {
            Some(next)
        }
    }

    /// True while the animation has not settled.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_and_snaps_to_target() {
        let mut glide = Glide::new(0.35);
        glide.start(500.0);

        let mut pos = 0.0;
        let mut ticks = 0;
        while glide.is_active() {
            pos = glide.tick(pos).unwrap();
            ticks += 1;
            assert!(ticks < 100, "glide never settled");
        }
        assert_eq!(pos, 500.0);
    }

    #[test]
    fn idle_glide_produces_nothing() {
        let mut glide = Glide::new(0.35);
        assert_eq!(glide.tick(100.0), None);
    }

    #[test]
    fn motion_decelerates() {
        let mut glide = Glide::new(0.3);
        glide.start(1000.0);
        let first = glide.tick(0.0).unwrap();
        let second = glide.tick(first).unwrap();
        assert!(first - 0.0 > second - first);
    }
}
