//! A terminal preview of a scroll-choreographed landing page.
//!
//! Run the binary to browse the page interactively; scrolling drives the
//! reveal triggers, counters and floating CTA the same way a browser would.
//! Run with `--script <file>` to replay a scroll timeline headlessly and
//! print which triggers fired.

mod app;
mod config;
mod core;
mod page;
mod script;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::page::form::FormEvent;
use crate::page::sample;
use crate::ui::{
    layout::AppLayout,
    navbar::NavBar,
    page_widget::PageWidget,
    popup::{MobileMenuPopup, SettingsPopup},
    theme::Theme,
};

/// Frames slower than this get a trace event.
const SLOW_FRAME_MS: u128 = 33;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll-animated landing page, in your terminal")]
struct Cli {
    /// Replay a scroll script headlessly and print a report.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Collapse stagger delays and counter durations.
    #[arg(long = "reduce-motion")]
    reduce_motion: bool,

    /// Section to open at (`home`, `programs`, `results`, ...).
    #[arg(long)]
    start: Option<String>,

    /// Viewport height in page px for `--script` replays.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Hide the floating call-to-action button.
    #[arg(long = "no-cta")]
    no_cta: bool,

    /// Event-loop tick rate in milliseconds.
    #[arg(long = "tick-rate", default_value_t = 16)]
    tick_rate: u64,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── headless replay mode ──────────────────────────────────
    if let Some(ref path) = cli.script {
        let timeline = script::ScrollScript::load(path)?;
        let report = script::replay(&timeline, cli.viewport, cli.reduce_motion);
        print!("{}", report.summary());
        return Ok(());
    }

    // ── initial state ─────────────────────────────────────────
    let mut config = config::AppConfig::load();
    if cli.reduce_motion {
        config.reduce_motion = true;
    }

    // Viewport height is refined by the first resize; a placeholder is fine
    // because we apply the real terminal size before the first dispatch.
    let mut doc = sample::build(800.0);
    if cli.no_cta {
        // Dropping the landmark is enough: the CTA evaluation skips
        // silently when its selector resolves to nothing.
        if let Some(cta) = doc.query(core::dispatch::SEL_FLOATING_CTA) {
            doc.get_mut(cta).id = None;
        }
    }
    let mut state = AppState::new(doc, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen)?;
    // Capability-checked extras: parallax needs mouse capture, and focus
    // events re-run the dispatcher when the terminal regains focus. Either
    // may be unsupported; the page works without them.
    state.mouse_enabled = execute!(stderr_handle, EnableMouseCapture).is_ok();
    let focus_enabled = execute!(stderr_handle, EnableFocusChange).is_ok();
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let epoch = Instant::now();

    // Sync the document to the real terminal size, then run the initial
    // dispatch so content already in view reveals without any scrolling.
    let size = terminal.size()?;
    handler::apply_resize(&mut state, size.width, size.height, 0);

    if let Some(ref start) = cli.start {
        if let Some(&(id, _)) = sample::NAV_SECTIONS.iter().find(|(s, _)| *s == start.as_str()) {
            handler::jump_to_section(&mut state, id);
        }
    }

    let mut events = spawn_event_reader(Duration::from_millis(cli.tick_rate.max(1)));

    // ── event loop ────────────────────────────────────────────
    loop {
        // Draw first so input handling below never delays a frame.
        let frame_start = Instant::now();
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            frame.render_widget(
                NavBar {
                    scrolled: state.nav_scrolled,
                    active: state.active_section,
                },
                layout.nav_area,
            );

            frame.render_widget(
                PageWidget {
                    doc: &state.doc,
                    form: &state.form,
                    form_focused: state.form_focused,
                },
                layout.page_area,
            );

            let hint = state.config.status_bar_hint();
            let status_text = match state.active_view {
                ActiveView::Page => state.status_message.as_deref().unwrap_or(&hint),
                ActiveView::MobileMenu | ActiveView::SettingsMenu => "",
            };
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);

            match state.active_view {
                ActiveView::MobileMenu => {
                    frame.render_widget(
                        MobileMenuPopup {
                            selected: state.menu_selected,
                        },
                        frame.area(),
                    );
                }
                ActiveView::SettingsMenu => {
                    frame.render_widget(SettingsPopup { state: &state }, frame.area());
                }
                ActiveView::Page => {}
            }
        })?;
        let frame_ms = frame_start.elapsed().as_millis();
        if frame_ms > SLOW_FRAME_MS {
            tracing::trace!(frame_ms, "slow frame");
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                let now_ms = epoch.elapsed().as_millis() as u64;
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k, now_ms),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m, now_ms),
                    AppEvent::Resize(cols, rows) => {
                        state.resize_events.push(now_ms, (cols, rows));
                    }
                    AppEvent::FocusGained => {
                        // Same refresh a browser does on visibilitychange:
                        // geometry may be stale after being backgrounded.
                        handler::run_dispatch(&mut state, now_ms);
                    }
                    AppEvent::FocusLost => {}
                    AppEvent::Tick => {
                        tick(&mut state, now_ms);
                    }
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    if state.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    if focus_enabled {
        execute!(terminal.backend_mut(), DisableFocusChange)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Per-tick bookkeeping: deliver debounced events, ease the glide, fire the
/// deferred menu jump, and advance reveals / counters / the form.
fn tick(state: &mut AppState, now_ms: u64) {
    if state.scroll_events.poll(now_ms).is_some() {
        handler::run_dispatch(state, now_ms);
    }
    if let Some((col, row)) = state.pointer_events.poll(now_ms) {
        handler::apply_pointer(state, col, row);
    }
    if let Some((cols, rows)) = state.resize_events.poll(now_ms) {
        handler::apply_resize(state, cols, rows, now_ms);
    }

    if let Some(next) = state.glide.tick(state.doc.scroll_top) {
        handler::set_scroll(state, next, now_ms);
    }

    if let Some((due_ms, id)) = state.pending_menu_jump {
        if now_ms >= due_ms {
            state.pending_menu_jump = None;
            handler::jump_to_section(state, id);
        }
    }

    state.dispatcher.advance(&mut state.doc, now_ms);

    if let Some(event) = state.form.advance(now_ms) {
        match event {
            FormEvent::Delivered => {}
            FormEvent::ThankYou => {
                state.status_message =
                    Some("Thank you for your interest! We'll be in touch soon.".into());
                state.form_focused = false;
            }
        }
    }
}
