//! Navigation controller: mobile menu, smooth link scrolling, active-link tracking.
//!
//! DESIGN
//! ======
//! The controller knows the nav links only by the fragment each one targets.
//! On every (frame-gated) scroll it re-derives the current section from the
//! probe point and marks every link targeting that section. Clicking a link
//! highlights that exact link straight away, before the smooth scroll lands
//! and the next recompute takes over.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::SiteConfig;
use crate::frame::FrameGate;
use crate::layout::{SectionBox, fragment_target, probe_y, section_at};

/// Mobile menu visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Navigation bar background treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavbarStyle {
    /// Page is at (or near) the top.
    #[default]
    Resting,
    /// Page has scrolled past the threshold; the bar becomes more opaque.
    Scrolled,
}

impl NavbarStyle {
    /// Style for a scroll offset: scrolled iff `scroll_y > threshold`.
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold { Self::Scrolled } else { Self::Resting }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Resting => "rgba(255, 255, 253, 0.95)",
            Self::Scrolled => "rgba(255, 255, 253, 0.98)",
        }
    }

    #[must_use]
    pub fn backdrop_filter(self) -> &'static str {
        match self {
            Self::Resting => "blur(10px)",
            Self::Scrolled => "blur(20px)",
        }
    }
}

/// Which link(s) carry the `active` class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ActiveLink {
    #[default]
    None,
    /// Set by a click, until the next scroll recompute.
    Clicked(usize),
    /// Every link targeting this section id.
    Section(String),
}

#[derive(Debug, Clone)]
pub struct NavController {
    targets: Vec<Option<String>>,
    menu: MenuState,
    active: ActiveLink,
    navbar: NavbarStyle,
    gate: FrameGate,
    probe_offset: f64,
    scrolled_threshold: f64,
    fallback_height: f64,
}

impl NavController {
    /// Build a controller for links with the given `href`s, in document order.
    #[must_use]
    pub fn new<I, S>(hrefs: I, config: &SiteConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets = hrefs
            .into_iter()
            .map(|href| fragment_target(href.as_ref()).map(str::to_owned))
            .collect();
        Self {
            targets,
            menu: MenuState::Closed,
            active: ActiveLink::None,
            navbar: NavbarStyle::Resting,
            gate: FrameGate::new(),
            probe_offset: config.probe_offset_px,
            scrolled_threshold: config.navbar_scrolled_px,
            fallback_height: config.navbar_fallback_height_px,
        }
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.targets.len()
    }

    /// Section id the link at `index` points at.
    #[must_use]
    pub fn target_of(&self, index: usize) -> Option<&str> {
        self.targets.get(index)?.as_deref()
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub fn navbar(&self) -> NavbarStyle {
        self.navbar
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        match &self.active {
            ActiveLink::None => false,
            ActiveLink::Clicked(clicked) => *clicked == index,
            ActiveLink::Section(id) => self.target_of(index) == Some(id.as_str()),
        }
    }

    /// Indices of every link currently marked active.
    #[must_use]
    pub fn active_links(&self) -> Vec<usize> {
        (0..self.targets.len()).filter(|&i| self.is_active(i)).collect()
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        tracing::debug!(open = self.menu.is_open(), "menu toggled");
        self.menu
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.menu.is_open();
        self.menu = MenuState::Closed;
        was_open
    }

    /// Handle a click on link `index` whose target section is `target`.
    ///
    /// Always closes the menu. Returns the scroll offset to animate to, which
    /// leaves the section's top edge just below the fixed navigation bar.
    pub fn link_clicked(&mut self, index: usize, target: Option<&SectionBox>, navbar_height: Option<f64>) -> Option<f64> {
        self.close_menu();
        let section = target?;
        self.active = ActiveLink::Clicked(index);
        let offset = section.top - navbar_height.unwrap_or(self.fallback_height);
        tracing::debug!(index, offset, "nav link scroll");
        Some(offset)
    }

    /// A raw scroll event arrived. Returns `true` when a frame should be scheduled.
    pub fn on_scroll(&mut self) -> bool {
        self.gate.request()
    }

    /// Frame callback: re-derive the active link and navbar style.
    pub fn recompute(&mut self, scroll_y: f64, sections: &[SectionBox]) -> NavbarStyle {
        let probe = probe_y(scroll_y, self.probe_offset);
        self.active = section_at(sections, probe)
            .and_then(|i| sections[i].id.clone())
            .map_or(ActiveLink::None, ActiveLink::Section);
        self.navbar = NavbarStyle::for_scroll(scroll_y, self.scrolled_threshold);
        self.gate.finish();
        self.navbar
    }
}
