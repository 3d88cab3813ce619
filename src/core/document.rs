//! In-memory page document — the layer the dispatcher mutates.
//!
//! Elements carry an optional `#id`, a class set, a page-space rectangle,
//! optional numeric count target, text content and a translate offset.
//! Selector lookups are the only way collaborators are located; a selector
//! that resolves to nothing is an expected condition, never an error.

use std::collections::BTreeSet;

use super::viewport::ClientRect;

/// Index of an element within its [`Document`].
pub type ElementId = usize;

/// One page element.
#[derive(Debug, Clone)]
pub struct Element {
    /// `#id` anchor, if any.
    pub id: Option<&'static str>,
    /// Class names present on the element.
    pub classes: BTreeSet<&'static str>,
    /// Top edge in page coordinates (px from document top).
    pub top: f64,
    /// Height in px.
    pub height: f64,
    /// Count-up target (the `data-count` analog), for stat numbers.
    pub count_target: Option<u64>,
    /// Display text. Counters overwrite this while ticking.
    pub text: String,
    /// Static annotation rendered next to the text (stat units, bar labels).
    /// Never touched by counters.
    pub label: Option<&'static str>,
    /// Translate offset in px, written by the parallax recompute.
    pub translate: (f64, f64),
}

impl Element {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            id: None,
            classes: BTreeSet::new(),
            top,
            height,
            count_target: None,
            text: String::new(),
            label: None,
            translate: (0.0, 0.0),
        }
    }

    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn with_count(mut self, target: u64) -> Self {
        self.count_target = Some(target);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Bottom edge in page coordinates.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The page: a flat element list in document order, plus window geometry.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    /// Current scroll offset in px.
    pub scroll_top: f64,
    /// Viewport height in px.
    pub viewport_h: f64,
}

impl Document {
    pub fn new(viewport_h: f64) -> Self {
        Self {
            elements: Vec::new(),
            scroll_top: 0.0,
            viewport_h,
        }
    }

    /// Append an element, returning its id. Document order is append order.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id]
    }

    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().enumerate()
    }

    /// Resolve a selector to the first matching element. `#name` matches by
    /// id, `.name` by class. Anything unmatched is `None` — absent
    /// collaborators are silently skipped by callers.
    pub fn query(&self, selector: &str) -> Option<ElementId> {
        if let Some(id) = selector.strip_prefix('#') {
            self.elements.iter().position(|e| e.id == Some(id))
        } else if let Some(class) = selector.strip_prefix('.') {
            self.elements.iter().position(|e| e.has_class(class))
        } else {
            None
        }
    }

    /// All elements matching a `.class` selector, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let Some(class) = selector.strip_prefix('.') else {
            return Vec::new();
        };
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_class(class))
            .map(|(i, _)| i)
            .collect()
    }

    /// The element's rectangle in viewport coordinates at the current scroll
    /// offset. Recomputed from live geometry on every call.
    pub fn client_rect(&self, id: ElementId) -> ClientRect {
        let e = &self.elements[id];
        ClientRect::new(e.top - self.scroll_top, e.bottom() - self.scroll_top)
    }

    /// Total page height (bottom edge of the lowest element).
    pub fn page_height(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.bottom())
            .fold(0.0, f64::max)
    }

    /// Greatest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.page_height() - self.viewport_h).max(0.0)
    }

    pub fn add_class(&mut self, id: ElementId, class: &'static str) {
        self.elements[id].classes.insert(class);
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.elements[id].classes.remove(class);
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.elements[id].text = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        let mut d = Document::new(400.0);
        d.push(Element::new(0.0, 600.0).with_id("home").with_class("section"));
        d.push(Element::new(600.0, 300.0).with_class("stats-grid"));
        d.push(
            Element::new(620.0, 40.0)
                .with_class("stat-item")
                .with_count(250),
        );
        d
    }

    #[test]
    fn id_and_class_selectors_resolve() {
        let d = doc();
        assert_eq!(d.query("#home"), Some(0));
        assert_eq!(d.query(".stats-grid"), Some(1));
        assert_eq!(d.query("#missing"), None);
        assert_eq!(d.query(".missing"), None);
        assert_eq!(d.query("garbage"), None);
    }

    #[test]
    fn query_all_preserves_document_order() {
        let mut d = doc();
        d.push(Element::new(660.0, 40.0).with_class("stat-item"));
        assert_eq!(d.query_all(".stat-item"), vec![2, 3]);
    }

    #[test]
    fn client_rect_tracks_scroll() {
        let mut d = doc();
        assert_eq!(d.client_rect(1).top, 600.0);
        d.scroll_top = 500.0;
        let rect = d.client_rect(1);
        assert_eq!(rect.top, 100.0);
        assert_eq!(rect.bottom, 400.0);
    }

    #[test]
    fn max_scroll_is_clamped_to_zero_for_short_pages() {
        let mut d = Document::new(2000.0);
        d.push(Element::new(0.0, 600.0));
        assert_eq!(d.max_scroll(), 0.0);
    }
}
