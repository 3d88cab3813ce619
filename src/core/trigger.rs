//! One-shot viewport-entry triggers.
//!
//! Stats, chart, timeline and credentials all share one shape: the first time
//! their container scrolls into view, reveal every item with a per-item
//! stagger — and never again for the lifetime of the page view. The trigger
//! owns its fired flag; the dispatcher only decides when to re-evaluate.

use super::document::Document;
use super::schedule::{RevealAction, RevealQueue};
use super::viewport::is_in_viewport;

/// Class added to items that fade/slide in.
pub const CLASS_VISIBLE: &str = "visible";
/// Class added to items that run a drawing animation.
pub const CLASS_ANIMATE: &str = "animate";

/// What "reveal" means for one item of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Add a class.
    Class(&'static str),
    /// Mark visible and count the item's number up over `duration_ms`.
    CountUp { duration_ms: u64 },
}

/// Static description of one trigger instance.
#[derive(Debug, Clone)]
pub struct TriggerSpec {
    /// Name used in logs.
    pub name: &'static str,
    /// Container selector that gates the whole trigger.
    pub container: &'static str,
    /// Item selector revealed once the container is seen.
    pub items: &'static str,
    /// Delay before the first item, in ms.
    pub base_delay_ms: u64,
    /// Extra delay per item index, in ms.
    pub stagger_ms: u64,
    /// Viewport proximity offset for the container test.
    pub proximity_px: f64,
    /// Per-item reveal variant.
    pub reveal: Reveal,
    /// Applied immediately at commit, before any item reveal
    /// (the timeline's connecting line). `(selector, class)`.
    pub commit: Option<(&'static str, &'static str)>,
}

/// A [`TriggerSpec`] plus its fired flag. Once fired, every later
/// evaluation is a no-op — the flag never resets.
#[derive(Debug, Clone)]
pub struct OneShotTrigger {
    pub spec: TriggerSpec,
    fired: bool,
}

impl OneShotTrigger {
    pub fn new(spec: TriggerSpec) -> Self {
        Self { spec, fired: false }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Evaluate the trigger against the document's current geometry.
    ///
    /// Returns `true` only on the evaluation that commits. Absent container
    /// → silent skip (the section simply isn't on this page); not yet in
    /// view → retried on the next dispatch.
    pub fn maybe_fire(
        &mut self,
        doc: &mut Document,
        queue: &mut RevealQueue,
        now_ms: u64,
    ) -> bool {
        if self.fired {
            return false;
        }
        let Some(container) = doc.query(self.spec.container) else {
            return false;
        };
        let rect = doc.client_rect(container);
        if !is_in_viewport(rect, doc.viewport_h, self.spec.proximity_px) {
            return false;
        }

        // Commit point — irreversible.
        self.fired = true;
        tracing::debug!(trigger = self.spec.name, now_ms, "trigger committed");

        if let Some((selector, class)) = self.spec.commit {
            if let Some(el) = doc.query(selector) {
                doc.add_class(el, class);
            }
        }

        for (index, el) in doc.query_all(self.spec.items).into_iter().enumerate() {
            let due = now_ms + self.spec.base_delay_ms + index as u64 * self.spec.stagger_ms;
            let action = match self.spec.reveal {
                Reveal::Class(class) => RevealAction::AddClass { el, class },
                Reveal::CountUp { duration_ms } => match doc.get(el).count_target {
                    Some(target) => RevealAction::StartCounter {
                        el,
                        target,
                        duration_ms,
                    },
                    // No numeric target on this item — just show it.
                    None => RevealAction::AddClass {
                        el,
                        class: CLASS_VISIBLE,
                    },
                },
            };
            queue.schedule(due, action);
        }
        true
    }
}
