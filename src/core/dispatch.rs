//! Scroll dispatcher — the orchestrator behind every scroll tick.
//!
//! `handle_scroll` runs the five trigger evaluations in a fixed order (stats,
//! chart, timeline, credentials, floating CTA) and then recomputes the hero
//! parallax offset. `advance` drains due staggered reveals and ticks active
//! counter tweens. All fired flags and `last_scroll_top` live inside the
//! dispatcher value — tests construct fresh isolated instances.

use super::counter::{CounterTween, DEFAULT_DURATION_MS, TICK_MS};
use super::document::{Document, ElementId};
use super::schedule::{RevealAction, RevealQueue};
use super::trigger::{OneShotTrigger, Reveal, TriggerSpec, CLASS_ANIMATE, CLASS_VISIBLE};
use super::viewport::{is_in_viewport, DEFAULT_PROXIMITY_PX};

// ── standard page selectors ─────────────────────────────────────

pub const SEL_HERO: &str = "#home";
pub const SEL_BOOKING: &str = "#book";
pub const SEL_FLOATING_CTA: &str = "#floating-cta";
pub const SEL_HERO_BACKGROUND: &str = ".hero-background";

/// Vertical parallax rate for the hero background.
const PARALLAX_RATE: f64 = 0.3;

/// Proximity used when checking whether the booking section is close enough
/// to hide the floating CTA.
const CTA_BOOKING_PROXIMITY_PX: f64 = 200.0;

// ── scroll state ────────────────────────────────────────────────

/// Direction-sensing state for the floating CTA. Updated unconditionally
/// after every evaluation; the CTA is its only writer.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub last_scroll_top: f64,
}

// ── floating CTA ────────────────────────────────────────────────

/// Continuously re-evaluated visibility toggle — deliberately not one-shot.
///
/// Visible iff the scroll position is past the hero's bottom edge, the
/// booking section is not within proximity, and the user is scrolling
/// downward since the last sample. Direction sensing compares consecutive
/// debounced samples only; reversals inside one debounce window are
/// invisible to it, which is intended.
#[derive(Debug, Clone)]
struct FloatingCta {
    hero: &'static str,
    booking: &'static str,
    cta: &'static str,
    proximity_px: f64,
}

impl FloatingCta {
    fn evaluate(&self, doc: &mut Document, scroll: &mut ScrollState) {
        let scroll_top = doc.scroll_top;
        // last_scroll_top must update even when collaborators are missing,
        // so the next sample still has a direction reference.
        let last = scroll.last_scroll_top;
        scroll.last_scroll_top = scroll_top;

        let (Some(cta), Some(hero)) = (doc.query(self.cta), doc.query(self.hero)) else {
            return;
        };

        let past_hero = scroll_top > doc.get(hero).bottom();
        // Missing booking section counts as "not near".
        let booking_near = doc
            .query(self.booking)
            .map(|book| is_in_viewport(doc.client_rect(book), doc.viewport_h, self.proximity_px))
            .unwrap_or(false);
        let scrolling_down = scroll_top > last;

        if past_hero && !booking_near && scrolling_down {
            doc.add_class(cta, CLASS_VISIBLE);
        } else {
            doc.remove_class(cta, CLASS_VISIBLE);
        }
    }
}

// ── dispatcher ──────────────────────────────────────────────────

/// A counter tween bound to its element, carrying its own next-due clock.
/// Removes itself from the active list on completion.
#[derive(Debug, Clone)]
struct ActiveTween {
    el: ElementId,
    tween: CounterTween,
    next_due_ms: u64,
}

/// Owns orchestration order, the reveal queue and active tweens. Trigger
/// fired-flags belong to the triggers themselves.
#[derive(Debug)]
pub struct Dispatcher {
    triggers: Vec<OneShotTrigger>,
    cta: FloatingCta,
    scroll: ScrollState,
    queue: RevealQueue,
    tweens: Vec<ActiveTween>,
}

impl Dispatcher {
    /// The standard five-trigger configuration for the landing page.
    ///
    /// `reduce_motion` collapses staggers and counter durations so every
    /// reveal lands on the first tick after its commit, with identical final
    /// state.
    pub fn standard(reduce_motion: bool) -> Self {
        let triggers = standard_specs(reduce_motion)
            .into_iter()
            .map(OneShotTrigger::new)
            .collect();

        Self {
            triggers,
            cta: FloatingCta {
                hero: SEL_HERO,
                booking: SEL_BOOKING,
                cta: SEL_FLOATING_CTA,
                proximity_px: CTA_BOOKING_PROXIMITY_PX,
            },
            scroll: ScrollState::default(),
            queue: RevealQueue::new(),
            tweens: Vec::new(),
        }
    }

    /// Re-time the triggers for a new reduce-motion setting, in place.
    ///
    /// Fired flags, queued reveals and in-flight tweens are untouched:
    /// committed reveals stay committed, only triggers that have not yet
    /// fired pick up the new delays.
    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        for (trigger, spec) in self.triggers.iter_mut().zip(standard_specs(reduce_motion)) {
            if !trigger.has_fired() {
                trigger.spec = spec;
            }
        }
    }

    /// One dispatch cycle: evaluate every trigger in fixed order, then the
    /// floating CTA, then the parallax recompute. Call on startup (to catch
    /// content already in view), on every debounced scroll, after resize and
    /// on focus regain.
    pub fn handle_scroll(&mut self, doc: &mut Document, now_ms: u64) {
        for trigger in &mut self.triggers {
            trigger.maybe_fire(doc, &mut self.queue, now_ms);
        }
        self.cta.evaluate(doc, &mut self.scroll);
        self.recompute_parallax(doc);
    }

    /// Drain due reveals and tick active counters. Call once per loop tick.
    pub fn advance(&mut self, doc: &mut Document, now_ms: u64) {
        while let Some(action) = self.queue.pop_due(now_ms) {
            self.apply(doc, action, now_ms);
        }

        for slot in &mut self.tweens {
            while slot.next_due_ms <= now_ms {
                slot.next_due_ms += TICK_MS;
                match slot.tween.tick() {
                    Some(frame) => {
                        doc.set_text(slot.el, frame.display.to_string());
                        if frame.done {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
        self.tweens.retain(|slot| !slot.tween.is_done());
    }

    fn apply(&mut self, doc: &mut Document, action: RevealAction, now_ms: u64) {
        match action {
            RevealAction::AddClass { el, class } => doc.add_class(el, class),
            RevealAction::StartCounter { el, target, duration_ms } => {
                doc.add_class(el, CLASS_VISIBLE);
                self.tweens.push(ActiveTween {
                    el,
                    tween: CounterTween::new(target, duration_ms),
                    next_due_ms: now_ms + TICK_MS,
                });
            }
        }
    }

    /// Hero background follows the scroll at a fraction of its speed.
    fn recompute_parallax(&self, doc: &mut Document) {
        if let Some(bg) = doc.query(SEL_HERO_BACKGROUND) {
            let rate = doc.scroll_top * PARALLAX_RATE;
            doc.get_mut(bg).translate = (0.0, rate);
        }
    }

    /// True once no staggered reveal or counter tween remains in flight.
    pub fn is_settled(&self) -> bool {
        self.queue.is_empty() && self.tweens.is_empty()
    }

    /// How many one-shot triggers have committed (status-bar fodder).
    pub fn fired_count(&self) -> usize {
        self.triggers.iter().filter(|t| t.has_fired()).count()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// Names of committed triggers, in orchestration order.
    pub fn fired_names(&self) -> Vec<&'static str> {
        self.triggers
            .iter()
            .filter(|t| t.has_fired())
            .map(|t| t.spec.name)
            .collect()
    }
}

/// The standard trigger table, timed for the given motion setting. Order
/// here is the evaluation order.
fn standard_specs(reduce_motion: bool) -> Vec<TriggerSpec> {
    let scale = |ms: u64| if reduce_motion { 0 } else { ms };
    let counter_ms = if reduce_motion { TICK_MS } else { DEFAULT_DURATION_MS };

    vec![
        TriggerSpec {
            name: "stats",
            container: ".stats-grid",
            items: ".stat-item",
            base_delay_ms: 0,
            stagger_ms: scale(200),
            proximity_px: DEFAULT_PROXIMITY_PX,
            reveal: Reveal::CountUp { duration_ms: counter_ms },
            commit: None,
        },
        TriggerSpec {
            name: "chart",
            container: ".simple-chart",
            items: ".chart-line",
            base_delay_ms: 0,
            stagger_ms: scale(500),
            proximity_px: DEFAULT_PROXIMITY_PX,
            reveal: Reveal::Class(CLASS_ANIMATE),
            commit: None,
        },
        TriggerSpec {
            name: "timeline",
            container: ".timeline",
            items: ".timeline-step",
            base_delay_ms: scale(500),
            stagger_ms: scale(200),
            proximity_px: DEFAULT_PROXIMITY_PX,
            reveal: Reveal::Class(CLASS_VISIBLE),
            commit: Some((".timeline-line", CLASS_ANIMATE)),
        },
        TriggerSpec {
            name: "credentials",
            container: ".credentials-list",
            items: ".credential-item",
            base_delay_ms: 0,
            stagger_ms: scale(150),
            proximity_px: DEFAULT_PROXIMITY_PX,
            reveal: Reveal::Class(CLASS_VISIBLE),
            commit: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::Element;

    /// Minimal page with a hero, stats and the CTA landmarks.
    fn page() -> Document {
        let mut doc = Document::new(500.0);
        doc.push(
            Element::new(0.0, 200.0)
                .with_id("home")
                .with_class("section"),
        );
        doc.push(Element::new(0.0, 200.0).with_class("hero-background"));
        doc.push(Element::new(900.0, 300.0).with_class("stats-grid"));
        doc.push(
            Element::new(920.0, 40.0)
                .with_class("stat-item")
                .with_count(100),
        );
        doc.push(
            Element::new(2600.0, 400.0)
                .with_id("book")
                .with_class("section"),
        );
        doc.push(Element::new(0.0, 0.0).with_id("floating-cta"));
        doc
    }

    fn cta_visible(doc: &Document) -> bool {
        let cta = doc.query(SEL_FLOATING_CTA).unwrap();
        doc.get(cta).has_class(CLASS_VISIBLE)
    }

    #[test]
    fn cta_follows_scroll_direction() {
        // Hero bottom at 200; booking section far below throughout.
        let mut doc = page();
        let mut dispatcher = Dispatcher::standard(false);

        doc.scroll_top = 0.0;
        dispatcher.handle_scroll(&mut doc, 0);
        assert!(!cta_visible(&doc), "hidden before leaving the hero");

        doc.scroll_top = 300.0;
        dispatcher.handle_scroll(&mut doc, 100);
        assert!(cta_visible(&doc), "visible while scrolling down past hero");

        doc.scroll_top = 250.0;
        dispatcher.handle_scroll(&mut doc, 200);
        assert!(!cta_visible(&doc), "hidden once direction reverses");
    }

    #[test]
    fn cta_hides_near_booking_section() {
        let mut doc = page();
        let mut dispatcher = Dispatcher::standard(false);

        // Deep scroll: booking section top (2600) enters the extended
        // viewport (scroll 2300 → client top 300 ≤ 500 - 200).
        doc.scroll_top = 2300.0;
        dispatcher.handle_scroll(&mut doc, 0);
        assert!(!cta_visible(&doc));
    }

    #[test]
    fn stats_counter_runs_to_exact_target() {
        let mut doc = page();
        let mut dispatcher = Dispatcher::standard(false);

        // Bring the stats grid into view and commit.
        doc.scroll_top = 600.0;
        dispatcher.handle_scroll(&mut doc, 0);
        assert_eq!(dispatcher.fired_count(), 1);

        // Drive the clock well past the 2s count-up.
        let mut now = 0;
        while !dispatcher.is_settled() {
            now += TICK_MS;
            assert!(now < 10_000, "counters never settled");
            dispatcher.advance(&mut doc, now);
        }

        let stat = doc.query(".stat-item").unwrap();
        assert!(doc.get(stat).has_class(CLASS_VISIBLE));
        assert_eq!(doc.get(stat).text, "100");
    }

    #[test]
    fn reduced_motion_settles_immediately_with_same_final_state() {
        let mut doc = page();
        let mut dispatcher = Dispatcher::standard(true);

        doc.scroll_top = 600.0;
        dispatcher.handle_scroll(&mut doc, 0);
        dispatcher.advance(&mut doc, TICK_MS);
        // One 16ms tick is enough: stagger collapsed, counter instant.
        dispatcher.advance(&mut doc, 2 * TICK_MS);
        assert!(dispatcher.is_settled());

        let stat = doc.query(".stat-item").unwrap();
        assert_eq!(doc.get(stat).text, "100");
    }

    #[test]
    fn motion_toggle_preserves_fired_triggers() {
        let mut doc = page();
        let mut dispatcher = Dispatcher::standard(false);

        // Fire stats and let its counter finish.
        doc.scroll_top = 600.0;
        dispatcher.handle_scroll(&mut doc, 0);
        assert_eq!(dispatcher.fired_count(), 1);
        let mut now = 0;
        while !dispatcher.is_settled() {
            now += TICK_MS;
            assert!(now < 10_000, "counters never settled");
            dispatcher.advance(&mut doc, now);
        }
        let stat = doc.query(".stat-item").unwrap();
        assert_eq!(doc.get(stat).text, "100");

        // Toggling motion re-times only unfired triggers.
        dispatcher.set_reduce_motion(true);
        assert_eq!(dispatcher.fired_count(), 1);

        // Re-dispatching at the same position schedules nothing new and the
        // finished counter is not restarted.
        dispatcher.handle_scroll(&mut doc, now);
        assert!(dispatcher.is_settled());
        assert_eq!(doc.get(stat).text, "100");
    }

    #[test]
    fn parallax_tracks_scroll_offset() {
        let mut doc = page();
        let mut dispatcher = Dispatcher::standard(false);

        doc.scroll_top = 400.0;
        dispatcher.handle_scroll(&mut doc, 0);
        let bg = doc.query(SEL_HERO_BACKGROUND).unwrap();
        assert_eq!(doc.get(bg).translate, (0.0, 120.0));
    }

    #[test]
    fn dispatch_on_empty_page_is_inert() {
        let mut doc = Document::new(500.0);
        let mut dispatcher = Dispatcher::standard(false);
        dispatcher.handle_scroll(&mut doc, 0);
        dispatcher.advance(&mut doc, 100);
        assert!(dispatcher.is_settled());
        assert_eq!(dispatcher.fired_count(), 0);
    }
}
