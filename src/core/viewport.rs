//! Viewport visibility predicate.
//!
//! A stateless query over live layout geometry: nothing here caches element
//! positions, so repeated calls with unchanged layout always agree.

/// An element's rectangle in viewport coordinates (page rect shifted by the
/// current scroll offset). `top` may be negative when the element has been
/// scrolled past.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub top: f64,
    pub bottom: f64,
}

impl ClientRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Default proximity offset: elements count as visible once they come within
/// 100 px of the bottom edge.
pub const DEFAULT_PROXIMITY_PX: f64 = 100.0;

/// Is any part of `rect` within the viewport, extended upward-tolerant by
/// `offset_px` at the bottom edge and strict at the top edge?
///
/// True iff the top edge is at or above `viewport_h - offset_px` AND the
/// bottom edge is at or below the top of the viewport.
pub fn is_in_viewport(rect: ClientRect, viewport_h: f64, offset_px: f64) -> bool {
    rect.top <= viewport_h - offset_px && rect.bottom >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_near_bottom_edge_is_visible() {
        let rect = ClientRect::new(50.0, 80.0);
        assert!(is_in_viewport(rect, 500.0, 100.0));
    }

    #[test]
    fn element_scrolled_fully_past_is_not_visible() {
        // bottom above the viewport top → hidden regardless of top
        let rect = ClientRect::new(-40.0, -10.0);
        assert!(!is_in_viewport(rect, 500.0, 100.0));
    }

    #[test]
    fn element_below_the_proximity_band_is_not_visible() {
        // top edge below viewport_h - offset → still too far down
        let rect = ClientRect::new(450.0, 600.0);
        assert!(!is_in_viewport(rect, 500.0, 100.0));
    }

    #[test]
    fn boundary_top_exactly_at_proximity_line_counts() {
        let rect = ClientRect::new(400.0, 500.0);
        assert!(is_in_viewport(rect, 500.0, 100.0));
    }

    #[test]
    fn repeated_calls_agree() {
        let rect = ClientRect::new(10.0, 90.0);
        let first = is_in_viewport(rect, 300.0, 100.0);
        for _ in 0..10 {
            assert_eq!(first, is_in_viewport(rect, 300.0, 100.0));
        }
    }
}
