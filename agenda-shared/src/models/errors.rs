//! Failure bodies returned by the backend.

use serde::{Deserialize, Serialize};

/// Failure body returned by the backend.
///
/// The login endpoint reports failures under `message` while the slot search
/// endpoint uses `error`; both are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Message produced by the login endpoint.
    #[serde(default)]
    pub message: Option<String>,
    /// Message produced by the slot search endpoint.
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Returns the most specific non-empty message, preferring `message`.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        self.message
            .filter(|text| !text.trim().is_empty())
            .or_else(|| self.error.filter(|text| !text.trim().is_empty()))
    }
}
