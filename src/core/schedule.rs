//! Due-time queue for staggered reveals.
//!
//! When a trigger commits, its per-item reveals are scheduled here at
//! `base + index * stagger` and drained by the dispatcher on each loop tick.
//! Ties drain in insertion order, so staggered siblings keep document order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::document::ElementId;

/// A reveal the dispatcher applies to the document when its time comes.
///
/// The `Ord` derive only exists so entries can live in a heap; `seq` is
/// unique per entry and always decides ties before the action is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealAction {
    /// Add a class to an element (visible / animate).
    AddClass {
        el: ElementId,
        class: &'static str,
    },
    /// Mark a stat item visible and start its count-up tween.
    StartCounter {
        el: ElementId,
        target: u64,
        duration_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    due_ms: u64,
    seq: u64,
    action: RevealAction,
}

/// Min-heap of pending reveals keyed by due time.
#[derive(Debug, Default)]
pub struct RevealQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl RevealQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, action: RevealAction) {
        self.heap.push(Reverse(Entry {
            due_ms,
            seq: self.seq,
            action,
        }));
        self.seq += 1;
    }

    /// Pop the next reveal whose due time has passed, earliest first.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<RevealAction> {
        match self.heap.peek() {
            Some(Reverse(entry)) if entry.due_ms <= now_ms => {
                self.heap.pop().map(|Reverse(e)| e.action)
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(el: ElementId) -> RevealAction {
        RevealAction::AddClass { el, class: "visible" }
    }

    #[test]
    fn drains_in_due_order() {
        let mut q = RevealQueue::new();
        q.schedule(300, add(2));
        q.schedule(100, add(0));
        q.schedule(200, add(1));

        assert_eq!(q.pop_due(50), None);
        assert_eq!(q.pop_due(1000), Some(add(0)));
        assert_eq!(q.pop_due(1000), Some(add(1)));
        assert_eq!(q.pop_due(1000), Some(add(2)));
        assert!(q.is_empty());
    }

    #[test]
    fn ties_drain_in_insertion_order() {
        let mut q = RevealQueue::new();
        q.schedule(100, add(5));
        q.schedule(100, add(6));
        assert_eq!(q.pop_due(100), Some(add(5)));
        assert_eq!(q.pop_due(100), Some(add(6)));
    }

    #[test]
    fn future_entries_stay_queued() {
        let mut q = RevealQueue::new();
        q.schedule(100, add(0));
        q.schedule(500, add(1));
        assert_eq!(q.pop_due(100), Some(add(0)));
        assert_eq!(q.pop_due(100), None);
        assert_eq!(q.len(), 1);
    }
}
