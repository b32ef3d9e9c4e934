//! Section geometry and the probe-point lookup.
//!
//! The "current" section is the one whose vertical span contains a probe
//! point a fixed distance below the viewport top. Navigation highlighting and
//! keyboard section jumps share this lookup so they always agree.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Vertical extent of one page section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    /// The section's `id`, if it has one.
    pub id: Option<String>,
    /// Offset from the document top.
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: Option<&str>, top: f64, height: f64) -> Self {
        Self { id: id.map(str::to_owned), top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: the top edge belongs to the section, the bottom does not.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Scroll direction for section jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Document-space y coordinate of the probe point.
#[must_use]
pub fn probe_y(scroll_y: f64, probe_offset: f64) -> f64 {
    scroll_y + probe_offset
}

/// Index of the section containing `probe`. Later sections win on overlap.
#[must_use]
pub fn section_at(sections: &[SectionBox], probe: f64) -> Option<usize> {
    sections.iter().rposition(|s| s.contains(probe))
}

/// Index of the section adjacent to `current` in document order.
#[must_use]
pub fn adjacent(sections: &[SectionBox], current: usize, direction: Direction) -> Option<usize> {
    let next = match direction {
        Direction::Next => current.checked_add(1)?,
        Direction::Previous => current.checked_sub(1)?,
    };
    (next < sections.len()).then_some(next)
}

/// Fragment id a `#section` link points at, without the leading `#`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
