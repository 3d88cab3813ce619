//! Headless scroll-script replay.
//!
//! A script is a plain-text timeline of scroll positions:
//!
//! ```text
//! # ms  scroll-px
//! 0     0
//! 500   1400
//! 2000  3800
//! ```
//!
//! Replay drives the sample page and a dispatcher through the timeline on a
//! virtual clock, then reports which triggers committed and what the stat
//! counters read. Useful for checking a page's reveal choreography without a
//! terminal.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::counter::TICK_MS;
use crate::core::dispatch::Dispatcher;
use crate::core::document::Document;
use crate::core::trigger::CLASS_VISIBLE;
use crate::page::sample;

/// Replay keeps ticking this long after the last event so trailing staggers
/// and counter tweens can finish.
const SETTLE_GRACE_MS: u64 = 4_000;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `<ms> <scroll-px>`, got {text:?}")]
    Parse { line: usize, text: String },

    #[error("line {line}: events must be in non-decreasing time order")]
    OutOfOrder { line: usize },
}

/// One scripted scroll position change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub at_ms: u64,
    pub scroll_top: f64,
}

/// A parsed scroll timeline.
#[derive(Debug, Clone, Default)]
pub struct ScrollScript {
    pub events: Vec<ScrollEvent>,
}

impl ScrollScript {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse the `<ms> <scroll-px>` line format. Blank lines and `#`
    /// comments are skipped.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut events = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let (Some(ms), Some(px), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(ScriptError::Parse { line, text: trimmed.to_string() });
            };
            let at_ms: u64 = ms.parse().map_err(|_| ScriptError::Parse {
                line,
                text: trimmed.to_string(),
            })?;
            let scroll_top: f64 = px.parse().map_err(|_| ScriptError::Parse {
                line,
                text: trimmed.to_string(),
            })?;

            if events.last().is_some_and(|last: &ScrollEvent| at_ms < last.at_ms) {
                return Err(ScriptError::OutOfOrder { line });
            }
            events.push(ScrollEvent { at_ms, scroll_top });
        }
        Ok(Self { events })
    }
}

/// Outcome of a headless replay.
#[derive(Debug)]
pub struct ReplayReport {
    /// Triggers that committed, in orchestration order.
    pub fired: Vec<&'static str>,
    pub trigger_count: usize,
    /// Final `(text, label)` of each stat item.
    pub stat_values: Vec<(String, String)>,
    /// Virtual ms elapsed, including settle time past the last event.
    pub elapsed_ms: u64,
    pub final_scroll: f64,
}

impl ReplayReport {
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "replay: {}/{} triggers fired in {} ms (final scroll {:.0} px)\n",
            self.fired.len(),
            self.trigger_count,
            self.elapsed_ms,
            self.final_scroll,
        ));
        for name in &self.fired {
            out.push_str(&format!("  fired: {name}\n"));
        }
        for (value, label) in &self.stat_values {
            out.push_str(&format!("  stat:  {value:>5}  {label}\n"));
        }
        out
    }
}

/// Run a script against the sample page on a virtual clock.
pub fn replay(script: &ScrollScript, viewport_h: f64, reduce_motion: bool) -> ReplayReport {
    let mut doc = sample::build(viewport_h);
    let mut dispatcher = Dispatcher::standard(reduce_motion);
    replay_into(script, &mut doc, &mut dispatcher)
}

/// Replay driver, split out so tests can inspect the document afterwards.
pub fn replay_into(
    script: &ScrollScript,
    doc: &mut Document,
    dispatcher: &mut Dispatcher,
) -> ReplayReport {
    // Initial sync pass catches content already in view at scroll 0.
    dispatcher.handle_scroll(doc, 0);

    let last_event_ms = script.events.last().map_or(0, |e| e.at_ms);
    let mut next_event = 0;
    let mut now_ms = 0;

    loop {
        while let Some(event) = script.events.get(next_event) {
            if event.at_ms > now_ms {
                break;
            }
            doc.scroll_top = event.scroll_top.clamp(0.0, doc.max_scroll());
            dispatcher.handle_scroll(doc, now_ms);
            tracing::debug!(at_ms = event.at_ms, scroll = doc.scroll_top, "script event");
            next_event += 1;
        }

        dispatcher.advance(doc, now_ms);

        let past_script = next_event >= script.events.len();
        if past_script && dispatcher.is_settled() {
            break;
        }
        if now_ms >= last_event_ms + SETTLE_GRACE_MS {
            break;
        }
        now_ms += TICK_MS;
    }

    let stat_values = doc
        .query_all(".stat-item")
        .into_iter()
        .map(|id| {
            let el = doc.get(id);
            (el.text.clone(), el.label.unwrap_or("").to_string())
        })
        .collect();

    ReplayReport {
        fired: dispatcher.fired_names(),
        trigger_count: dispatcher.trigger_count(),
        stat_values,
        elapsed_ms: now_ms,
        final_scroll: doc.scroll_top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comments_and_blank_lines() {
        let script = ScrollScript::parse("# warm-up\n\n0 0\n500 1400\n").unwrap();
        assert_eq!(script.events.len(), 2);
        assert_eq!(script.events[1], ScrollEvent { at_ms: 500, scroll_top: 1400.0 });
    }

    #[test]
    fn rejects_malformed_lines() {
        let err = ScrollScript::parse("0 0\nbogus\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 2, .. }));

        let err = ScrollScript::parse("500 100\n0 0\n").unwrap_err();
        assert!(matches!(err, ScriptError::OutOfOrder { line: 2 }));
    }

    #[test]
    fn full_sweep_fires_everything() {
        let script = ScrollScript::parse("0 0\n100 1400\n200 2300\n300 3100\n").unwrap();
        let report = replay(&script, 800.0, false);
        assert_eq!(report.fired, vec!["stats", "chart", "timeline", "credentials"]);
        // Counters land on their exact targets.
        assert_eq!(report.stat_values[0].0, "250");
        assert_eq!(report.stat_values[3].0, "40");
    }

    #[test]
    fn short_scroll_leaves_later_triggers_unfired() {
        let script = ScrollScript::parse("0 0\n100 1400\n").unwrap();
        let mut doc = sample::build(800.0);
        let mut dispatcher = Dispatcher::standard(true);
        let report = replay_into(&script, &mut doc, &mut dispatcher);
        assert_eq!(report.fired, vec!["stats", "chart"]);
        // Credentials stay dim.
        for id in doc.query_all(".credential-item") {
            assert!(!doc.get(id).has_class(CLASS_VISIBLE));
        }
    }
}
