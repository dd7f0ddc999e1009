//! User-facing surface of the action client.
//!
//! Hosts plug their own rendering in through the capability traits below:
//! [`Dialogs`] (confirmation prompt, success/error notifications, toasts),
//! [`BusyIndicator`], [`Navigator`] and [`FileSaver`]. [`Capabilities`]
//! bundles one of each and falls back to log-only implementations for
//! anything the host does not provide.
//!
//! Mutable UI state that used to live in globals (the busy flag and the
//! active theme) is held by [`UiState`], a cheap cloneable handle owned by
//! the application shell.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::constants::{CONFIRM_CANCEL_LABEL, CONFIRM_DEFAULT_LABEL};
use crate::theme::Theme;

pub mod saver;
pub mod terminal;

pub use saver::{DirectorySaver, SaveError};

/// A yes/no question put to the user before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            confirm_label: CONFIRM_DEFAULT_LABEL.to_string(),
            cancel_label: CONFIRM_CANCEL_LABEL.to_string(),
        }
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Modal dialogs and notifications.
///
/// `success` and `error` resolve once the user has dismissed the
/// notification; follow-up actions wait for that.
#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
    async fn success(&self, title: &str, text: &str);
    async fn error(&self, title: &str, text: &str);
    async fn toast(&self, kind: ToastKind, title: &str);
}

/// Visual signal that a request is in flight.
pub trait BusyIndicator: Send + Sync {
    fn show(&self, label: &str);
    fn hide(&self);
}

/// Moves the user to another view after a successful action.
pub trait Navigator: Send + Sync {
    /// Re-render the current view from scratch.
    fn reload(&self);
    /// Go to `uri`.
    fn navigate(&self, uri: &str);
}

/// Stores a downloaded payload on the client side.
#[async_trait]
pub trait FileSaver: Send + Sync {
    /// Save `bytes` under `filename` and return where they ended up.
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, SaveError>;
}

/// Log-only dialogs. Confirmation prompts are declined since nobody can answer them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDialogs;

#[async_trait]
impl Dialogs for LogDialogs {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        log::warn!("No confirmation surface available, declining: {}", prompt.text);
        false
    }

    async fn success(&self, title: &str, text: &str) {
        log::info!("{title} {text}");
    }

    async fn error(&self, title: &str, text: &str) {
        log::error!("{title} {text}");
    }

    async fn toast(&self, kind: ToastKind, title: &str) {
        log::info!("[{kind:?}] {title}");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBusyIndicator;

impl BusyIndicator for NoopBusyIndicator {
    fn show(&self, _label: &str) {}
    fn hide(&self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn reload(&self) {
        log::info!("Reload requested");
    }

    fn navigate(&self, uri: &str) {
        log::info!("Navigation requested: {uri}");
    }
}

/// The set of host capabilities handed to the action client.
#[derive(Clone)]
pub struct Capabilities {
    pub dialogs: Arc<dyn Dialogs>,
    pub busy: Arc<dyn BusyIndicator>,
    pub navigator: Arc<dyn Navigator>,
    pub saver: Arc<dyn FileSaver>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            dialogs: Arc::new(LogDialogs),
            busy: Arc::new(NoopBusyIndicator),
            navigator: Arc::new(LogNavigator),
            saver: Arc::new(DirectorySaver::current_dir()),
        }
    }
}

impl Capabilities {
    pub fn with_dialogs(mut self, dialogs: Arc<dyn Dialogs>) -> Self {
        self.dialogs = dialogs;
        self
    }

    pub fn with_busy(mut self, busy: Arc<dyn BusyIndicator>) -> Self {
        self.busy = busy;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn with_saver(mut self, saver: Arc<dyn FileSaver>) -> Self {
        self.saver = saver;
        self
    }
}

#[derive(Debug, Default)]
struct UiStateInner {
    busy: Option<String>,
    theme: Theme,
}

/// Shared handle to the mutable UI state.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    inner: Arc<Mutex<UiStateInner>>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy_label().is_some()
    }

    /// Label of the busy indicator while it is shown
    pub fn busy_label(&self) -> Option<String> {
        self.inner.lock().ok().and_then(|inner| inner.busy.clone())
    }

    pub fn theme(&self) -> Theme {
        self.inner.lock().map(|inner| inner.theme).unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.theme = theme;
        }
    }

    /// Show the busy indicator until the returned guard is dropped.
    pub fn busy(&self, label: &str, indicator: Arc<dyn BusyIndicator>) -> BusyGuard {
        self.set_busy(Some(label.to_string()));
        indicator.show(label);
        BusyGuard {
            state: self.clone(),
            indicator,
        }
    }

    fn set_busy(&self, label: Option<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.busy = label;
        }
    }
}

/// Keeps the busy indicator visible; hides it on drop, whatever the exit path.
#[must_use = "the busy indicator is hidden as soon as the guard is dropped"]
pub struct BusyGuard {
    state: UiState,
    indicator: Arc<dyn BusyIndicator>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.state.set_busy(None);
        self.indicator.hide();
    }
}
