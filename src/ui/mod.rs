//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the document + app state and turns them into terminal
//! cells. No behavior logic happens here: reveals, counters and the CTA are
//! all decided by the dispatcher; rendering only reads classes and text.

pub mod glide;
pub mod layout;
pub mod navbar;
pub mod page_widget;
pub mod popup;
pub mod theme;
