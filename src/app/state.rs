//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::config::AppConfig;
use crate::core::debounce::{
    Debouncer, POINTER_WAIT_MS, RESIZE_WAIT_MS, SCROLL_WAIT_MS,
};
use crate::core::dispatch::Dispatcher;
use crate::core::document::Document;
use crate::page::form::BookingForm;
use crate::ui::glide::Glide;

/// Terminal width at or above which the mobile menu closes itself
/// (the 768 px breakpoint analog).
pub const MOBILE_BREAK_COLS: u16 = 100;

/// Delay between closing the mobile menu and gliding to the chosen section.
pub const MENU_JUMP_DELAY_MS: u64 = 300;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    MobileMenu,
    SettingsMenu,
}

/// Top-level application state.
pub struct AppState {
    /// The page document the dispatcher mutates.
    pub doc: Document,
    /// Trigger flags, reveal queue, counter tweens, CTA direction state.
    pub dispatcher: Dispatcher,
    /// Booking form (fields + submission state machine).
    pub form: BookingForm,
    /// User-configurable bindings and motion settings.
    pub config: AppConfig,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Highlighted link in the mobile menu.
    pub menu_selected: usize,
    /// Highlighted item in the settings menu.
    pub settings_selected: usize,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Nav bar compact treatment once scrolled past the threshold.
    pub nav_scrolled: bool,
    /// Id of the section the nav currently highlights.
    pub active_section: Option<&'static str>,
    /// True while keystrokes go to the booking form fields.
    pub form_focused: bool,
    /// Smooth scroll-to-section easing.
    pub glide: Glide,
    /// Scroll events collapse here; delivery triggers a dispatch cycle.
    pub scroll_events: Debouncer<()>,
    /// Pointer-move events for the hero parallax, `(col, row)`.
    pub pointer_events: Debouncer<(u16, u16)>,
    /// Resize events, `(cols, rows)`.
    pub resize_events: Debouncer<(u16, u16)>,
    /// Deferred glide scheduled when a mobile-menu link closes the menu:
    /// `(due_ms, section id)`.
    pub pending_menu_jump: Option<(u64, &'static str)>,
    /// Mouse capture succeeded at startup (capability-checked).
    pub mouse_enabled: bool,
    /// Current terminal width, for the mobile breakpoint.
    pub term_cols: u16,
    /// Current terminal height.
    pub term_rows: u16,
}

impl AppState {
    pub fn new(doc: Document, config: AppConfig) -> Self {
        let dispatcher = Dispatcher::standard(config.reduce_motion);
        Self {
            doc,
            dispatcher,
            form: BookingForm::new(),
            config,
            active_view: ActiveView::default(),
            menu_selected: 0,
            settings_selected: 0,
            should_quit: false,
            status_message: None,
            nav_scrolled: false,
            active_section: None,
            form_focused: false,
            glide: Glide::new(0.35),
            scroll_events: Debouncer::new(SCROLL_WAIT_MS),
            pointer_events: Debouncer::new(POINTER_WAIT_MS),
            resize_events: Debouncer::new(RESIZE_WAIT_MS),
            pending_menu_jump: None,
            mouse_enabled: false,
            term_cols: 0,
            term_rows: 0,
        }
    }
}
