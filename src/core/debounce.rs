//! Trailing-edge debouncer for bursty event sources.
//!
//! Scroll, pointer-move and resize events arrive far faster than we want to
//! react. Each source gets its own [`Debouncer`]: pushes within the wait
//! window replace the pending value and re-arm the deadline, so only the last
//! event of a burst is ever delivered — and always on a later loop tick,
//! never inline from the push.

/// Default quiet window for scroll events.
pub const SCROLL_WAIT_MS: u64 = 10;
/// Quiet window for pointer-move events.
pub const POINTER_WAIT_MS: u64 = 20;
/// Quiet window for resize events.
pub const RESIZE_WAIT_MS: u64 = 250;

/// Collapses a burst of values into the single latest one, delivered once the
/// source has been quiet for `wait_ms`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait_ms: u64,
    deadline: Option<u64>,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline: None,
            pending: None,
        }
    }

    /// Record a new value. Any value already pending is dropped (not queued)
    /// and the deadline restarts from `now_ms`.
    pub fn push(&mut self, now_ms: u64, value: T) {
        self.pending = Some(value);
        self.deadline = Some(now_ms + self.wait_ms);
    }

    /// Take the pending value if its quiet window has elapsed. Call this once
    /// per loop tick; returns `None` while the window is still open or when
    /// nothing is pending.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// True while a value is waiting for its window to close.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_last_value() {
        let mut d = Debouncer::new(10);
        d.push(0, "a");
        d.push(5, "b");
        d.push(8, "c");

        // Window from the t=8 push closes at t=18.
        assert_eq!(d.poll(17), None);
        assert_eq!(d.poll(18), Some("c"));
        // Delivered exactly once.
        assert_eq!(d.poll(30), None);
    }

    #[test]
    fn push_never_delivers_inline() {
        let mut d = Debouncer::new(10);
        d.push(0, 1);
        assert!(d.is_pending());
        // Even polling at the same instant keeps the window open.
        assert_eq!(d.poll(0), None);
    }

    #[test]
    fn separate_bursts_each_deliver() {
        let mut d = Debouncer::new(10);
        d.push(0, 1);
        assert_eq!(d.poll(10), Some(1));
        d.push(50, 2);
        assert_eq!(d.poll(60), Some(2));
    }

    #[test]
    fn empty_poll_is_noop() {
        let mut d: Debouncer<u32> = Debouncer::new(10);
        assert_eq!(d.poll(100), None);
        assert!(!d.is_pending());
    }
}
