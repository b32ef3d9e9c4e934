//! Single-pending-frame gate for scroll-driven recomputes.
//!
//! Scroll events fire far more often than the display refreshes. Each
//! scroll-reactive controller owns one `FrameGate`; the first scroll event in
//! a frame opens a request, later ones are dropped until the scheduled
//! recompute calls [`FrameGate::finish`]. Gates are never shared between
//! controllers, so one controller's pending frame never delays another's.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled recompute as done.
    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
