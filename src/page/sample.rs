//! The demo landing page — a tutoring-studio one-pager.
//!
//! Geometry is in page pixels (20 px per terminal row). Section elements
//! carry both an `#id` (nav anchor) and the `section` class; their text is
//! the nav label. Everything the dispatcher touches is located purely by
//! selector, so removing a section from this builder degrades gracefully.

use crate::core::document::{Document, Element};

/// Sections that appear in the navigation bar, in page order.
/// `(id, nav label)` — resolved against the document at render time.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("programs", "Programs"),
    ("results", "Results"),
    ("method", "Method"),
    ("about", "About"),
    ("book", "Book"),
];

/// Build the full landing page.
pub fn build(viewport_h: f64) -> Document {
    let mut doc = Document::new(viewport_h);

    // ── hero ───────────────────────────────────────────────────
    doc.push(Element::new(0.0, 700.0).with_id("home").with_class("section"));
    doc.push(Element::new(0.0, 700.0).with_class("hero-background"));
    doc.push(
        Element::new(240.0, 40.0)
            .with_class("hero-title")
            .with_text("N O R T H L I G H T   T U T O R I N G"),
    );
    doc.push(
        Element::new(300.0, 20.0)
            .with_class("copy")
            .with_text("One-to-one coaching that meets every learner where they are."),
    );
    doc.push(
        Element::new(380.0, 20.0)
            .with_class("copy")
            .with_text("scroll to explore ▾"),
    );

    // ── programs ───────────────────────────────────────────────
    doc.push(
        Element::new(700.0, 600.0)
            .with_id("programs")
            .with_class("section"),
    );
    doc.push(
        Element::new(760.0, 30.0)
            .with_class("heading")
            .with_text("Programs"),
    );
    doc.push(
        Element::new(840.0, 20.0)
            .with_class("solution-card")
            .with_text("▪ Exam Preparation — structured review blocks with weekly checkpoints"),
    );
    doc.push(
        Element::new(900.0, 20.0)
            .with_class("solution-card")
            .with_text("▪ Foundations — rebuild confidence in maths and writing from first principles"),
    );
    doc.push(
        Element::new(960.0, 20.0)
            .with_class("solution-card")
            .with_text("▪ Mentoring — study habits, planning, and accountability for self-learners"),
    );

    // ── results: stats + chart ─────────────────────────────────
    doc.push(
        Element::new(1300.0, 900.0)
            .with_id("results")
            .with_class("section"),
    );
    doc.push(
        Element::new(1360.0, 30.0)
            .with_class("heading")
            .with_text("Results that compound"),
    );
    doc.push(Element::new(1440.0, 260.0).with_class("stats-grid"));
    doc.push(
        Element::new(1460.0, 40.0)
            .with_class("stat-item")
            .with_count(250)
            .with_text("0")
            .with_label("students coached"),
    );
    doc.push(
        Element::new(1520.0, 40.0)
            .with_class("stat-item")
            .with_count(15)
            .with_text("0")
            .with_label("years teaching"),
    );
    doc.push(
        Element::new(1580.0, 40.0)
            .with_class("stat-item")
            .with_count(98)
            .with_text("0")
            .with_label("% would recommend us"),
    );
    doc.push(
        Element::new(1640.0, 40.0)
            .with_class("stat-item")
            .with_count(40)
            .with_text("0")
            .with_label("point average score gain"),
    );
    doc.push(Element::new(1780.0, 340.0).with_class("simple-chart"));
    doc.push(
        Element::new(1820.0, 40.0)
            .with_class("chart-line")
            .with_count(45)
            .with_label("Term 1"),
    );
    doc.push(
        Element::new(1880.0, 40.0)
            .with_class("chart-line")
            .with_count(62)
            .with_label("Term 2"),
    );
    doc.push(
        Element::new(1940.0, 40.0)
            .with_class("chart-line")
            .with_count(78)
            .with_label("Term 3"),
    );
    doc.push(
        Element::new(2000.0, 40.0)
            .with_class("chart-line")
            .with_count(91)
            .with_label("Term 4"),
    );

    // ── method: timeline ───────────────────────────────────────
    doc.push(
        Element::new(2200.0, 800.0)
            .with_id("method")
            .with_class("section"),
    );
    doc.push(
        Element::new(2260.0, 30.0)
            .with_class("heading")
            .with_text("How we work"),
    );
    doc.push(Element::new(2340.0, 560.0).with_class("timeline"));
    doc.push(Element::new(2340.0, 560.0).with_class("timeline-line"));
    doc.push(
        Element::new(2380.0, 60.0)
            .with_class("timeline-step")
            .with_text("1 · Assess — a relaxed first session maps strengths and gaps"),
    );
    doc.push(
        Element::new(2500.0, 60.0)
            .with_class("timeline-step")
            .with_text("2 · Plan — a term plan with milestones you can actually see"),
    );
    doc.push(
        Element::new(2620.0, 60.0)
            .with_class("timeline-step")
            .with_text("3 · Coach — weekly sessions, homework that fits the week"),
    );
    doc.push(
        Element::new(2740.0, 60.0)
            .with_class("timeline-step")
            .with_text("4 · Review — progress reviews with learner and parents"),
    );

    // ── about: credentials ─────────────────────────────────────
    doc.push(
        Element::new(3000.0, 700.0)
            .with_id("about")
            .with_class("section"),
    );
    doc.push(
        Element::new(3060.0, 30.0)
            .with_class("heading")
            .with_text("Credentials"),
    );
    doc.push(Element::new(3140.0, 480.0).with_class("credentials-list"));
    doc.push(
        Element::new(3160.0, 40.0)
            .with_class("credential-item")
            .with_text("✓ MEd, Learning & Instruction"),
    );
    doc.push(
        Element::new(3250.0, 40.0)
            .with_class("credential-item")
            .with_text("✓ Certified secondary maths teacher"),
    );
    doc.push(
        Element::new(3340.0, 40.0)
            .with_class("credential-item")
            .with_text("✓ Examiner experience, national board"),
    );
    doc.push(
        Element::new(3430.0, 40.0)
            .with_class("credential-item")
            .with_text("✓ Working-with-children clearance"),
    );
    doc.push(
        Element::new(3520.0, 40.0)
            .with_class("credential-item")
            .with_text("✓ First-aid certified"),
    );

    // ── booking ────────────────────────────────────────────────
    doc.push(
        Element::new(3700.0, 700.0)
            .with_id("book")
            .with_class("section"),
    );
    doc.push(
        Element::new(3760.0, 30.0)
            .with_class("heading")
            .with_text("Book a free session"),
    );
    // Marker for where the live form renders; the form itself is state,
    // not document content.
    doc.push(Element::new(3840.0, 300.0).with_class("booking-form"));

    // ── footer + floating CTA ──────────────────────────────────
    doc.push(
        Element::new(4460.0, 40.0)
            .with_class("copy")
            .with_text("© Northlight Tutoring — hello@northlight.example"),
    );
    doc.push(
        Element::new(0.0, 0.0)
            .with_id("floating-cta")
            .with_text("↗ Book a free session"),
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::TICK_MS;
    use crate::core::dispatch::Dispatcher;
    use crate::core::trigger::{CLASS_ANIMATE, CLASS_VISIBLE};

    #[test]
    fn landmarks_resolve() {
        let doc = build(800.0);
        for (id, _) in NAV_SECTIONS {
            assert!(doc.query(&format!("#{id}")).is_some(), "missing #{id}");
        }
        assert_eq!(doc.query_all(".stat-item").len(), 4);
        assert_eq!(doc.query_all(".chart-line").len(), 4);
        assert_eq!(doc.query_all(".timeline-step").len(), 4);
        assert_eq!(doc.query_all(".credential-item").len(), 5);
        assert!(doc.query(".timeline-line").is_some());
        assert!(doc.query("#floating-cta").is_some());
    }

    #[test]
    fn full_scroll_sweep_fires_every_trigger() {
        let mut doc = build(800.0);
        let mut dispatcher = Dispatcher::standard(true);

        // Sweep the page in viewport-sized steps, advancing time as we go.
        let mut now = 0u64;
        let mut scroll = 0.0;
        while scroll <= doc.max_scroll() {
            doc.scroll_top = scroll;
            dispatcher.handle_scroll(&mut doc, now);
            now += 100;
            dispatcher.advance(&mut doc, now);
            scroll += 400.0;
        }
        // Let any remaining reveals land.
        for _ in 0..8 {
            now += TICK_MS;
            dispatcher.advance(&mut doc, now);
        }

        assert_eq!(dispatcher.fired_count(), dispatcher.trigger_count());
        for el in doc.query_all(".credential-item") {
            assert!(doc.get(el).has_class(CLASS_VISIBLE));
        }
        for el in doc.query_all(".chart-line") {
            assert!(doc.get(el).has_class(CLASS_ANIMATE));
        }
        for el in doc.query_all(".stat-item") {
            let e = doc.get(el);
            assert_eq!(e.text, e.count_target.unwrap().to_string());
        }
    }

    #[test]
    fn page_is_tall_enough_to_scroll() {
        let doc = build(800.0);
        assert!(doc.max_scroll() > 2000.0);
    }
}
