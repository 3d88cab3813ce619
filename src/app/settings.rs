//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and UI renderers consume the same source of truth without cross-importing.

use super::state::AppState;

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean toggle — reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => label,
        }
    }
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Toggle {
        label: "Reduce Motion",
        get: |s| s.config.reduce_motion,
        set: |s, v| {
            s.config.reduce_motion = v;
            let _ = s.config.save();
            // Unfired triggers pick up the new timings; fired ones keep
            // their committed schedules.
            s.dispatcher.set_reduce_motion(v);
            s.status_message = Some(format!(
                "Reduce motion: {}",
                if v { "on" } else { "off" }
            ));
        },
    },
    SettingsItem::Toggle {
        label: "Mouse Parallax",
        get: |s| s.config.mouse_parallax,
        set: |s, v| {
            s.config.mouse_parallax = v;
            let _ = s.config.save();
        },
    },
    SettingsItem::Cycle {
        label: "Scroll Step",
        value: |s| format!("{}px", s.config.scroll_step_px),
        cycle: |s| {
            s.config.cycle_scroll_step();
            let _ = s.config.save();
            s.status_message = Some(format!("Scroll step: {}px", s.config.scroll_step_px));
        },
    },
];
