//! Booking-form submission flow.
//!
//! The round-trip is simulated locally with fixed delays: 1500 ms in the
//! "Sending…" state, then 2000 ms showing success, then the form resets and
//! a thank-you message is surfaced. No network is involved.

/// How long the simulated send takes.
pub const SENDING_MS: u64 = 1500;
/// How long the success state is displayed before the form resets.
pub const SENT_MS: u64 = 2000;

/// Label on the submit button while idle.
const IDLE_LABEL: &str = "Book a Session";
const SENDING_LABEL: &str = "Sending...";
const SENT_LABEL: &str = "✓ Message Sent!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    /// Simulated send in flight until the given time.
    Sending { until_ms: u64 },
    /// Success display until the given time, then reset.
    Sent { until_ms: u64 },
}

/// Something the app should react to after a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The send "completed"; the success label is now showing.
    Delivered,
    /// The form reset to idle; show the thank-you message.
    ThankYou,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

/// The booking form: three text fields, one focused at a time, and the
/// submission state machine.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub fields: Vec<FormField>,
    pub focused: usize,
    phase: FormPhase,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField { label: "Name", value: String::new() },
                FormField { label: "Email", value: String::new() },
                FormField { label: "Message", value: String::new() },
            ],
            focused: 0,
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True while a submission is in flight or displaying success — input
    /// and re-submission are disabled.
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, FormPhase::Idle)
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn type_char(&mut self, c: char) {
        if !self.is_busy() {
            self.fields[self.focused].value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_busy() {
            self.fields[self.focused].value.pop();
        }
    }

    /// Begin the simulated send. No-op unless idle.
    pub fn submit(&mut self, now_ms: u64) -> bool {
        if self.is_busy() {
            return false;
        }
        tracing::info!(
            name = %self.fields[0].value,
            email = %self.fields[1].value,
            "form submitted"
        );
        self.phase = FormPhase::Sending { until_ms: now_ms + SENDING_MS };
        true
    }

    /// Advance the state machine. Call once per loop tick.
    pub fn advance(&mut self, now_ms: u64) -> Option<FormEvent> {
        match self.phase {
            FormPhase::Sending { until_ms } if now_ms >= until_ms => {
                self.phase = FormPhase::Sent { until_ms: now_ms + SENT_MS };
                Some(FormEvent::Delivered)
            }
            FormPhase::Sent { until_ms } if now_ms >= until_ms => {
                for field in &mut self.fields {
                    field.value.clear();
                }
                self.focused = 0;
                self.phase = FormPhase::Idle;
                Some(FormEvent::ThankYou)
            }
            _ => None,
        }
    }

    /// Current submit-button label.
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => IDLE_LABEL,
            FormPhase::Sending { .. } => SENDING_LABEL,
            FormPhase::Sent { .. } => SENT_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_walks_sending_then_sent_then_reset() {
        let mut form = BookingForm::new();
        form.type_char('a');
        assert!(form.submit(100));
        assert_eq!(form.button_label(), "Sending...");

        // Nothing happens before the send delay elapses.
        assert_eq!(form.advance(100 + SENDING_MS - 1), None);
        assert_eq!(form.advance(100 + SENDING_MS), Some(FormEvent::Delivered));
        assert_eq!(form.button_label(), "✓ Message Sent!");

        let sent_at = 100 + SENDING_MS;
        assert_eq!(form.advance(sent_at + SENT_MS), Some(FormEvent::ThankYou));
        assert_eq!(form.button_label(), "Book a Session");
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn resubmit_while_busy_is_rejected() {
        let mut form = BookingForm::new();
        assert!(form.submit(0));
        assert!(!form.submit(10));
        // Typing is also disabled while busy.
        form.type_char('x');
        assert!(form.fields[0].value.is_empty());
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut form = BookingForm::new();
        form.focus_next();
        form.type_char('e');
        assert_eq!(form.fields[1].value, "e");
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused, 0);
    }
}
