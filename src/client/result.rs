//! Action results and outcomes

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::transport::TransportError;
use crate::ui::SaveError;

/// Outcome contract returned by an action endpoint:
/// `{"success": bool, "message": "...", "redirect": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ActionResult {
    /// Decode a response body. A body that is not a JSON object with a
    /// boolean `success` field is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("action result must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// The server message, or `fallback` when it is missing or empty.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().filter(|m| !m.is_empty()).unwrap_or(fallback)
    }

    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref().filter(|r| !r.is_empty())
    }
}

/// Why an action could not produce a usable result.
///
/// All variants look the same to the user; the distinction is kept for logs.
#[derive(Debug, thiserror::Error)]
pub enum ActionFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed action result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// The follow-up that ran after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// The caller's callback ran.
    Callback,
    /// The current view was reloaded.
    Reload,
    /// Navigation to the given (resolved) URI.
    Navigate(String),
    None,
}

/// Report of what an action did. Never an error for the caller to handle:
/// every failure has already been shown to the user.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The user declined the confirmation prompt; no request was made.
    Cancelled,
    /// The server reported success.
    Completed { result: ActionResult, follow_up: FollowUp },
    /// A download was stored at `location`.
    Saved { location: String },
    /// The server reported `success = false`.
    Rejected(ActionResult),
    /// Transport, decode or save failure.
    Failed(ActionFailure),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Completed { .. } | ActionOutcome::Saved { .. })
    }

    pub fn follow_up(&self) -> Option<&FollowUp> {
        match self {
            ActionOutcome::Completed { follow_up, .. } => Some(follow_up),
            _ => None,
        }
    }
}
