//! Scroll effects: back-to-top visibility and hero-shape parallax.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::SiteConfig;
use crate::frame::FrameGate;

/// Visibility of the scroll-to-top control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackToTop {
    #[default]
    Hidden,
    Visible,
}

impl BackToTop {
    /// Visible iff `scroll_y > threshold`.
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold { Self::Visible } else { Self::Hidden }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Parallax speed of the shape at `index`.
#[must_use]
pub fn parallax_speed(index: usize, base: f64, step: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let index = index as f64;
    base + index * step
}

/// Vertical offset of the shape at `index`: shapes drift up, deeper ones faster.
#[must_use]
pub fn parallax_offset(scroll_y: f64, index: usize, base: f64, step: f64) -> f64 {
    let offset = -(scroll_y * parallax_speed(index, base, step));
    // Keep `-0` out of the rendered transform.
    if offset == 0.0 { 0.0 } else { offset }
}

/// CSS `transform` value for a vertical offset in pixels.
#[must_use]
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// What one frame of scroll effects should render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub back_to_top: BackToTop,
    /// One offset per hero shape, in document order.
    pub shape_offsets: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    gate: FrameGate,
    threshold: f64,
    base_speed: f64,
    speed_step: f64,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: FrameGate::new(),
            threshold: config.back_to_top_px,
            base_speed: config.parallax_base_speed,
            speed_step: config.parallax_speed_step,
        }
    }

    /// A raw scroll event arrived. Returns `true` when a frame should be scheduled.
    pub fn on_scroll(&mut self) -> bool {
        self.gate.request()
    }

    /// Frame callback for `shape_count` hero shapes.
    pub fn recompute(&mut self, scroll_y: f64, shape_count: usize) -> ScrollFrame {
        let frame = ScrollFrame {
            back_to_top: BackToTop::for_scroll(scroll_y, self.threshold),
            shape_offsets: (0..shape_count)
                .map(|i| parallax_offset(scroll_y, i, self.base_speed, self.speed_step))
                .collect(),
        };
        self.gate.finish();
        frame
    }
}
