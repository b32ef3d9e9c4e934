//! Entrance animations: one-shot fade-in on first intersection, and the
//! staggered hero entrance on page load.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::Timings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Still observed; not yet scrolled into view.
    #[default]
    Waiting,
    /// Triggered once; observation has stopped.
    Revealed,
}

/// One-shot trigger state for a list of observed elements.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Waiting; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Number of elements still waiting for their first intersection.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Waiting).count()
    }

    /// An intersection entry arrived for `index`.
    ///
    /// Returns `true` exactly once per element: the first time it intersects.
    /// The caller then applies the effect and stops observing it.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.states.get_mut(index) {
            Some(state @ RevealState::Waiting) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

// ── Hero entrance ───────────────────────────────────────────────

pub const HERO_HIDDEN_OPACITY: &str = "0";
pub const HERO_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const HERO_SHOWN_OPACITY: &str = "1";
pub const HERO_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const HERO_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Delay before the hero element at `index` starts its entrance.
#[must_use]
pub fn stagger_delay_ms(index: usize, timings: &Timings) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    timings
        .hero_stagger_base_ms
        .saturating_add(index.saturating_mul(timings.hero_stagger_step_ms))
}
