//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── page content ───────────────────────────────────────────
    pub fn hero_title_style() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn copy_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Items whose reveal hasn't fired yet.
    pub fn unrevealed_style() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    pub fn revealed_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn stat_number_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chart_bar_style() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn timeline_line_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn hero_background_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn nav_style(scrolled: bool) -> Style {
        if scrolled {
            Style::default().bg(Color::Black).fg(Color::White)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn nav_brand_style() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_link_style(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn cta_style() -> Style {
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn form_focused_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn form_button_style(busy: bool) -> Style {
        if busy {
            Style::default().bg(Color::Green).fg(Color::Black)
        } else {
            Style::default().bg(Color::Magenta).fg(Color::White)
        }
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
