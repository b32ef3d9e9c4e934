//! Document lifecycle as reported by `document.readyState`.
//!
//! The wasm start function runs after an async fetch and instantiate, so by
//! the time controllers are wired the document may be past the events they
//! would otherwise wait for. Callers check the state first and run at once
//! when the event has already fired.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Still parsing; `DOMContentLoaded` is pending.
    Loading,
    /// Parsed; subresources may still be loading.
    Interactive,
    /// Window `load` has fired.
    Complete,
}

impl ReadyState {
    /// Map a `readyState` string. Unknown values count as parsed but not loaded.
    #[must_use]
    pub fn from_dom(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "complete" => Self::Complete,
            _ => Self::Interactive,
        }
    }

    /// Whether `DOMContentLoaded` has already fired.
    #[must_use]
    pub fn is_parsed(self) -> bool {
        self != Self::Loading
    }

    /// Whether window `load` has already fired.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        self == Self::Complete
    }
}
