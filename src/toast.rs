//! Single-slot notification (toast) lifecycle.
//!
//! At most one toast exists at a time: showing a new one evicts the current
//! one immediately, without its exit animation. Every toast gets a fresh
//! [`ToastId`]; deferred callbacks (slide-in, auto-dismiss, removal) carry the
//! id they were scheduled for and become no-ops once that toast is gone.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;

/// Accent of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Modifier class, e.g. `notification--error`.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification--{}", self.as_str())
    }

    /// Border colour variable for the accent.
    #[must_use]
    pub fn border_color(self) -> String {
        format!("var(--color-{})", self.as_str())
    }

    /// Tinted background gradient for the accent.
    #[must_use]
    pub fn background(self) -> String {
        format!("linear-gradient(to right, rgba(var(--color-{}-rgb), 0.1), var(--color-surface))", self.as_str())
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Where a toast is in its slide-in / slide-out animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted off-screen, waiting to slide in.
    Entering,
    Shown,
    /// Sliding out; removed once the exit animation ends.
    Leaving,
}

impl ToastPhase {
    /// Horizontal offset for the phase.
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateX(0)",
            Self::Entering | Self::Leaving => "translateX(420px)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

/// Result of [`ToastCenter::show`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub id: ToastId,
    /// Toast that was removed to make room, if any.
    pub evicted: Option<ToastId>,
}

struct Active<A> {
    toast: Toast,
    attachments: Vec<A>,
}

/// Holds at most one toast, plus whatever the renderer attached to it.
///
/// Attachments (listeners, element handles) live exactly as long as their
/// toast: they are dropped when it is evicted or removed.
pub struct ToastCenter<A = ()> {
    current: Option<Active<A>>,
    next_id: u64,
}

impl<A> Default for ToastCenter<A> {
    fn default() -> Self {
        Self { current: None, next_id: 0 }
    }
}

impl<A> ToastCenter<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|active| &active.toast)
    }

    /// Replace any toast with a new one in the `Entering` phase.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> Shown {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let evicted = self.current.take().map(|active| active.toast.id);
        let message = message.into();
        tracing::debug!(id = id.get(), %kind, %message, "toast");
        let toast = Toast { id, message, kind, phase: ToastPhase::Entering };
        self.current = Some(Active { toast, attachments: Vec::new() });
        Shown { id, evicted }
    }

    /// Tie `attachment` to toast `id`. A stale id drops it at once and returns `false`.
    pub fn attach(&mut self, id: ToastId, attachment: A) -> bool {
        match self.current.as_mut() {
            Some(active) if active.toast.id == id => {
                active.attachments.push(attachment);
                true
            }
            _ => false,
        }
    }

    /// Slide-in timer fired. Returns `true` if `id` moved to `Shown`.
    pub fn reveal(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(Active { toast, .. }) if toast.id == id && toast.phase == ToastPhase::Entering => {
                toast.phase = ToastPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start the exit animation. Returns `true` if `id` started leaving.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(Active { toast, .. }) if toast.id == id && toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Exit animation finished. Returns `true` if `id` was removed.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|active| active.toast.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
