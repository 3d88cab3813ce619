//! Input handling — maps key/mouse events to state mutations.
//!
//! Scroll position updates immediately (the terminal "scrolls natively");
//! only the dispatcher reacts through the debounced scroll channel, polled
//! once per loop tick in `main`.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::dispatch::SEL_HERO_BACKGROUND;
use crate::page::sample::NAV_SECTIONS;
use crate::page::{rows_to_px, ROW_PX};
use crate::ui::glide::NAV_ALLOWANCE_PX;
use crate::ui::layout::CHROME_ROWS;
use crate::ui::navbar;

use super::settings::{SettingsItem, SETTINGS_ITEMS};
use super::state::{ActiveView, AppState, MENU_JUMP_DELAY_MS, MOBILE_BREAK_COLS};

/// Page px scrolled per mouse-wheel notch.
const WHEEL_STEP_PX: f64 = 60.0;

/// Nav treatment switches to "scrolled" past this offset.
const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Lead distance for active-link detection.
const NAV_LEAD_PX: f64 = 100.0;

// ── keys ────────────────────────────────────────────────────────

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now_ms: u64) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key, now_ms),
        ActiveView::MobileMenu => handle_menu_key(state, key, now_ms),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
    }
}

fn handle_page_key(state: &mut AppState, key: KeyEvent, now_ms: u64) {
    if state.form_focused {
        handle_form_key(state, key, now_ms);
        return;
    }

    match key.code {
        // Focus the booking form, gliding it into view first.
        KeyCode::Tab => {
            state.form_focused = true;
            jump_to_section(state, "book");
            return;
        }
        // Direct section jumps.
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as u8 - b'1') as usize;
            if let Some(&(id, _)) = NAV_SECTIONS.get(idx) {
                jump_to_section(state, id);
            }
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::ToggleMenu => {
            state.active_view = ActiveView::MobileMenu;
            state.menu_selected = 0;
        }
        Action::ScrollUp => apply_scroll_delta(state, -state.config.scroll_step_px, now_ms),
        Action::ScrollDown => apply_scroll_delta(state, state.config.scroll_step_px, now_ms),
        Action::PageUp => apply_scroll_delta(state, -state.doc.viewport_h * 0.9, now_ms),
        Action::PageDown => apply_scroll_delta(state, state.doc.viewport_h * 0.9, now_ms),
        Action::Top => {
            state.glide.cancel();
            set_scroll(state, 0.0, now_ms);
        }
        Action::Bottom => {
            state.glide.cancel();
            set_scroll(state, state.doc.max_scroll(), now_ms);
        }
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent, now_ms: u64) {
    match key.code {
        KeyCode::Esc => state.form_focused = false,
        KeyCode::Tab => state.form.focus_next(),
        KeyCode::Backspace => state.form.backspace(),
        KeyCode::Enter => {
            if state.form.submit(now_ms) {
                state.status_message = None;
            }
        }
        KeyCode::Char(c) => state.form.type_char(c),
        _ => {}
    }
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent, now_ms: u64) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => state.active_view = ActiveView::Page,
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu_selected = state.menu_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.menu_selected = (state.menu_selected + 1).min(NAV_SECTIONS.len() - 1);
        }
        KeyCode::Enter => {
            // Close first, glide shortly after — the menu slide-out and the
            // scroll don't fight each other.
            let (id, _) = NAV_SECTIONS[state.menu_selected];
            state.active_view = ActiveView::Page;
            state.pending_menu_jump = Some((now_ms + MENU_JUMP_DELAY_MS, id));
        }
        _ => {}
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.active_view = ActiveView::Page;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.settings_selected = (state.settings_selected + 1).min(SETTINGS_ITEMS.len() - 1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            match &SETTINGS_ITEMS[state.settings_selected] {
                SettingsItem::Toggle { get, set, .. } => {
                    let current = get(state);
                    set(state, !current);
                }
                SettingsItem::Cycle { cycle, .. } => cycle(state),
            }
        }
        _ => {}
    }
}

// ── mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now_ms: u64) {
    match mouse.kind {
        MouseEventKind::ScrollDown => apply_scroll_delta(state, WHEEL_STEP_PX, now_ms),
        MouseEventKind::ScrollUp => apply_scroll_delta(state, -WHEEL_STEP_PX, now_ms),
        MouseEventKind::Moved => {
            state.pointer_events.push(now_ms, (mouse.column, mouse.row));
        }
        MouseEventKind::Down(MouseButton::Left) => {
            // Nav bar link clicks.
            if mouse.row < navbar::NAV_ROWS {
                if let Some(id) = navbar::hit_link(mouse.column) {
                    jump_to_section(state, id);
                }
            }
        }
        _ => {}
    }
}

// ── scroll plumbing ─────────────────────────────────────────────

/// Move the scroll offset by `delta`, cancelling any active glide.
pub fn apply_scroll_delta(state: &mut AppState, delta: f64, now_ms: u64) {
    state.glide.cancel();
    let next = state.doc.scroll_top + delta;
    set_scroll(state, next, now_ms);
}

/// Set the scroll offset (clamped) and arm the debounced dispatch.
pub fn set_scroll(state: &mut AppState, scroll_top: f64, now_ms: u64) {
    state.doc.scroll_top = scroll_top.clamp(0.0, state.doc.max_scroll());
    state.scroll_events.push(now_ms, ());
}

/// Glide the viewport to a section, leaving room for the fixed nav.
pub fn jump_to_section(state: &mut AppState, id: &'static str) {
    let selector = format!("#{id}");
    let Some(el) = state.doc.query(&selector) else {
        return; // section not on this page — silently skip
    };
    let target = (state.doc.get(el).top - NAV_ALLOWANCE_PX).clamp(0.0, state.doc.max_scroll());
    state.glide.start(target);
}

/// One full dispatch cycle plus the nav-state refresh that follows it.
pub fn run_dispatch(state: &mut AppState, now_ms: u64) {
    state.dispatcher.handle_scroll(&mut state.doc, now_ms);
    update_nav(state);
}

/// Nav chrome state: scrolled treatment and the active section link.
pub fn update_nav(state: &mut AppState) {
    let scroll_top = state.doc.scroll_top;
    state.nav_scrolled = scroll_top > NAV_SCROLL_THRESHOLD_PX;

    // Re-detect from scratch so a gap between sections drops the highlight
    // instead of keeping the previous one.
    state.active_section = None;
    for &(id, _) in NAV_SECTIONS {
        let selector = format!("#{id}");
        let Some(el) = state.doc.query(&selector) else {
            continue;
        };
        let section = state.doc.get(el);
        let section_top = section.top - NAV_LEAD_PX;
        if scroll_top > section_top && scroll_top <= section_top + section.height {
            state.active_section = Some(id);
        }
    }
}

// ── debounced event application ─────────────────────────────────

/// Hero pointer parallax: map the pointer position to a small translate.
/// Disabled below the mobile breakpoint and once the hero is scrolled away.
pub fn apply_pointer(state: &mut AppState, col: u16, row: u16) {
    if !state.config.mouse_parallax || !state.mouse_enabled {
        return;
    }
    if state.term_cols < MOBILE_BREAK_COLS || state.term_cols == 0 {
        return;
    }
    if state.doc.scroll_top >= state.doc.viewport_h {
        return;
    }
    let Some(bg) = state.doc.query(SEL_HERO_BACKGROUND) else {
        return;
    };
    // Max ±20 px of drift in each axis, scaled from the pointer's offset
    // from the terminal centre.
    let x = (col as f64 / state.term_cols as f64 - 0.5) * 20.0;
    let y = (row as f64 * ROW_PX / state.doc.viewport_h.max(1.0) - 0.5) * 20.0;
    state.doc.get_mut(bg).translate = (x, y);
}

/// Debounced resize: recompute the viewport, close the mobile menu on wide
/// terminals, and re-run the dispatcher against the new geometry.
pub fn apply_resize(state: &mut AppState, cols: u16, rows: u16, now_ms: u64) {
    state.term_cols = cols;
    state.term_rows = rows;
    state.doc.viewport_h = rows_to_px(rows.saturating_sub(CHROME_ROWS));

    if cols >= MOBILE_BREAK_COLS && state.active_view == ActiveView::MobileMenu {
        state.active_view = ActiveView::Page;
    }

    run_dispatch(state, now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::page::sample;

    fn state() -> AppState {
        let mut s = AppState::new(sample::build(800.0), AppConfig::defaults());
        s.term_cols = 120;
        s.term_rows = 43;
        s
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn scroll_key_moves_and_arms_dispatch() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Down), 0);
        assert_eq!(s.doc.scroll_top, s.config.scroll_step_px);
        assert!(s.scroll_events.is_pending());
    }

    #[test]
    fn scroll_clamps_at_page_edges() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Up), 0);
        assert_eq!(s.doc.scroll_top, 0.0);
        handle_key(&mut s, key(KeyCode::End), 0);
        assert_eq!(s.doc.scroll_top, s.doc.max_scroll());
    }

    #[test]
    fn section_digit_starts_a_glide() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('3')), 0);
        assert!(s.glide.is_active());
    }

    #[test]
    fn menu_enter_schedules_a_delayed_jump() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('m')), 0);
        assert_eq!(s.active_view, ActiveView::MobileMenu);
        handle_key(&mut s, key(KeyCode::Down), 0);
        handle_key(&mut s, key(KeyCode::Enter), 1000);
        assert_eq!(s.active_view, ActiveView::Page);
        assert_eq!(
            s.pending_menu_jump,
            Some((1000 + MENU_JUMP_DELAY_MS, "programs"))
        );
    }

    #[test]
    fn wide_resize_closes_the_mobile_menu() {
        let mut s = state();
        s.active_view = ActiveView::MobileMenu;
        apply_resize(&mut s, 120, 40, 0);
        assert_eq!(s.active_view, ActiveView::Page);
        // Narrow terminals keep it open.
        s.active_view = ActiveView::MobileMenu;
        apply_resize(&mut s, 60, 40, 0);
        assert_eq!(s.active_view, ActiveView::MobileMenu);
    }

    #[test]
    fn form_focus_captures_typing() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Tab), 0);
        assert!(s.form_focused);
        handle_key(&mut s, key(KeyCode::Char('q')), 0);
        // 'q' typed into the field, not treated as quit.
        assert!(!s.should_quit);
        assert_eq!(s.form.fields[0].value, "q");
        handle_key(&mut s, key(KeyCode::Esc), 0);
        assert!(!s.form_focused);
    }

    #[test]
    fn nav_state_follows_scroll() {
        let mut s = state();
        s.doc.scroll_top = 0.0;
        update_nav(&mut s);
        assert!(!s.nav_scrolled);
        assert_eq!(s.active_section, Some("home"));

        s.doc.scroll_top = 1400.0;
        update_nav(&mut s);
        assert!(s.nav_scrolled);
        assert_eq!(s.active_section, Some("results"));
    }

    #[test]
    fn nav_highlight_clears_outside_section_ranges() {
        let mut s = state();
        s.doc.scroll_top = 1400.0;
        update_nav(&mut s);
        assert_eq!(s.active_section, Some("results"));

        // Past the last section's detection band: no link stays lit.
        s.doc.scroll_top = 4400.0;
        update_nav(&mut s);
        assert_eq!(s.active_section, None);
    }

    #[test]
    fn reduce_motion_toggle_keeps_fired_triggers() {
        let mut s = state();
        s.doc.scroll_top = 1400.0;
        run_dispatch(&mut s, 0);
        let fired = s.dispatcher.fired_count();
        assert!(fired >= 1);

        // Toggle Reduce Motion through the settings menu (first item).
        s.active_view = ActiveView::SettingsMenu;
        handle_key(&mut s, key(KeyCode::Enter), 0);
        assert!(s.config.reduce_motion);
        assert_eq!(s.dispatcher.fired_count(), fired);
    }

    #[test]
    fn pointer_parallax_respects_gates() {
        let mut s = state();
        s.mouse_enabled = true;
        apply_pointer(&mut s, 90, 10);
        let bg = s.doc.query(SEL_HERO_BACKGROUND).unwrap();
        assert_ne!(s.doc.get(bg).translate, (0.0, 0.0));

        // Scrolled past the hero: pointer motion is ignored.
        let before = s.doc.get(bg).translate;
        s.doc.scroll_top = s.doc.viewport_h + 10.0;
        apply_pointer(&mut s, 10, 2);
        assert_eq!(s.doc.get(bg).translate, before);
    }
}
