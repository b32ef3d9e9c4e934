//! Light/dark theme selection and persistence.
//!
//! The initial theme is the persisted choice if there is one, else the
//! operating system's colour-scheme hint. Toggling persists the new choice;
//! once a choice exists (persisted, or made this session) system hint changes
//! are ignored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the root `data-color-scheme` attribute and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle: the glyph of the theme a click switches to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    key: String,
    applied: Theme,
    chosen_this_session: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the initial theme from `store`, falling back to the system hint.
    pub fn init(store: S, key: &str, system_prefers_dark: bool) -> Self {
        let mut controller = Self { store, key: key.to_owned(), applied: Theme::Light, chosen_this_session: false };
        controller.applied = controller
            .stored_choice()
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        tracing::info!(theme = %controller.applied, "initial theme");
        controller
    }

    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the user has picked a theme that should outrank the system hint.
    #[must_use]
    pub fn has_explicit_choice(&self) -> bool {
        self.chosen_this_session || self.stored_choice().is_some()
    }

    /// Flip the theme and persist the new choice.
    ///
    /// A failed write is logged; the flip still applies for this session.
    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.toggled();
        self.chosen_this_session = true;
        if let Err(e) = self.store.save(&self.key, self.applied.as_str()) {
            tracing::warn!(error = %e, theme = %self.applied, "theme choice not persisted");
        }
        self.applied
    }

    /// The operating system's hint changed. Returns the theme to apply, if any.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            tracing::debug!("system theme change ignored; explicit choice present");
            return None;
        }
        self.applied = Theme::from_system(prefers_dark);
        Some(self.applied)
    }

    fn stored_choice(&self) -> Option<Theme> {
        match self.store.load(&self.key) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "theme preference unreadable");
                None
            }
        }
    }
}
