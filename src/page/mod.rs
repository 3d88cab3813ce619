//! Page content and collaborators that sit outside the dispatcher core —
//! the demo landing page and the booking form.

pub mod form;
pub mod sample;

/// One terminal row corresponds to this many page pixels.
pub const ROW_PX: f64 = 20.0;

/// Convert a terminal row count to page pixels.
pub fn rows_to_px(rows: u16) -> f64 {
    rows as f64 * ROW_PX
}
