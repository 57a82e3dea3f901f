//! Section tracking for the single-page layout.
//!
//! Spans are measured fresh on every recomputation and never cached; the
//! functions here only do the arithmetic over one snapshot.

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub key: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Document position that decides the current section.
pub fn scroll_position(scroll_y: f64, nav_bar_height: f64, lookahead: f64) -> f64 {
    scroll_y + nav_bar_height + lookahead
}

/// First span in document order containing `position`, if any.
pub fn current_section(spans: &[SectionSpan], position: f64) -> Option<&str> {
    spans
        .iter()
        .find(|span| span.contains(position))
        .map(|span| span.key.as_str())
}

/// Scroll offset that puts a section's top just below the nav bar.
pub fn target_offset(section_top: f64, nav_bar_height: f64, margin: f64) -> f64 {
    section_top - nav_bar_height - margin
}

/// Document-relative span of the element with id `key`.
pub fn element_span(key: &str) -> Option<SectionSpan> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(key)?;
    let rect = element.get_bounding_client_rect();
    let scroll_y = window.scroll_y().unwrap_or_default();
    Some(SectionSpan {
        key: key.to_string(),
        top: rect.top() + scroll_y,
        height: rect.height(),
    })
}

/// Measures each key's element in document order. Keys without an element
/// are skipped.
pub fn measure_sections<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<SectionSpan> {
    keys.into_iter().filter_map(element_span).collect()
}
