//! Login request and response bodies.

use serde::{Deserialize, Serialize};

/// Credentials posted to `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account name.
    pub user: String,

    /// Plain-text password, sent over the authenticated transport only.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests. Some deployments omit it on
    /// partial failures, so it is optional on the wire.
    #[serde(default)]
    pub token: Option<String>,
}
