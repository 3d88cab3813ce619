//! Core behavior engine – viewport predicate, debouncing, triggers, and the
//! scroll dispatcher that ties them together.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Time is a plain millisecond count supplied by the caller, so every piece
//! is testable with a virtual clock.

pub mod counter;
pub mod debounce;
pub mod dispatch;
pub mod document;
pub mod schedule;
pub mod trigger;
pub mod viewport;
