//! Light/dark theme preference.
//!
//! The theme is resolved once at startup from the persisted preference (or
//! the ambient `prefers_dark` signal when nothing was saved) and flipped by
//! [`ThemeController::toggle`], which persists every change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{THEME_KEY, THEME_LABEL_DARK_MODE, THEME_LABEL_LIGHT_MODE};
use crate::storage::{PreferenceStore, StorageError};
use crate::ui::UiState;

/// Theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle control: it names the theme a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() {
            THEME_LABEL_LIGHT_MODE
        } else {
            THEME_LABEL_DARK_MODE
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Applies and persists the theme preference.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    ui: UiState,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, ui: UiState) -> Self {
        Self { store, ui }
    }

    /// The persisted preference, if any. Unrecognised values count as absent.
    pub fn saved(&self) -> Option<Theme> {
        let raw = self.store.get(THEME_KEY)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme preference: {e}");
                None
            }
        }
    }

    /// Resolve the startup theme and apply it to the UI state.
    ///
    /// Nothing is written to the store; the key only appears on first toggle.
    pub fn init(&self, prefers_dark: bool) -> Theme {
        let theme = match self.saved() {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        };
        self.ui.set_theme(theme);
        log::debug!("Initial theme: {theme}");
        theme
    }

    /// Flip the active theme, persist it, and return the new value.
    ///
    /// The UI state is only updated once the preference has been stored.
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let next = self.ui.theme().toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        self.ui.set_theme(next);
        log::info!("Theme switched to {next}");
        Ok(next)
    }

    pub fn current(&self) -> Theme {
        self.ui.theme()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
