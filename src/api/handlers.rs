//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use crate::metrics::{inc_http_requests, LatencyTimer};

/// Environment variable whose presence is reported by the root endpoint.
pub const API_KEY_VAR: &str = "API_KEY";

/// Greeting returned by the root endpoint.
pub const GREETING_MESSAGE: &str = "Hello from the Flask app deployed via Helm!";

/// API version reported by the root endpoint.
pub const API_VERSION: &str = "1.0";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name of the environment variable holding the API key.
    api_key_var: Arc<str>,
}

impl AppState {
    /// Create state that reports on `API_KEY`.
    pub fn new() -> Self {
        Self::with_api_key_var(API_KEY_VAR)
    }

    /// Create state that reports on a different environment variable.
    pub fn with_api_key_var(name: &str) -> Self {
        Self {
            api_key_var: Arc::from(name),
        }
    }

    /// Name of the environment variable being reported on.
    pub fn api_key_var(&self) -> &str {
        &self.api_key_var
    }

    /// Read the environment now and report whether the key is set.
    pub fn api_key_status(&self) -> ApiKeyStatus {
        ApiKeyStatus::from_value(std::env::var_os(&*self.api_key_var).as_deref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the API key is configured. Never carries the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiKeyStatus {
    /// Present and non-empty.
    #[serde(rename = "Set (Hidden)")]
    Set,
    /// Unset or empty.
    #[serde(rename = "Not Set")]
    NotSet,
}

impl ApiKeyStatus {
    /// Classify a raw environment value.
    pub fn from_value<S: AsRef<std::ffi::OsStr> + ?Sized>(value: Option<&S>) -> Self {
        match value {
            Some(v) if !v.as_ref().is_empty() => Self::Set,
            _ => Self::NotSet,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "Set (Hidden)",
            Self::NotSet => "Not Set",
        }
    }
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    /// Static greeting.
    pub message: &'static str,
    /// API version: "1.0".
    pub version: &'static str,
    /// Whether the API key is set.
    pub api_key_status: ApiKeyStatus,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "UP".
    pub status: &'static str,
}

/// Root handler - greeting plus API key presence.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    let _timer = LatencyTimer::new("/");
    inc_http_requests("/");

    let api_key_status = state.api_key_status();
    debug!(api_key_status = api_key_status.as_str(), "Serving greeting");

    Json(GreetingResponse {
        message: GREETING_MESSAGE,
        version: API_VERSION,
        api_key_status,
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    let _timer = LatencyTimer::new("/health");
    inc_http_requests("/health");

    (StatusCode::OK, Json(HealthResponse { status: "UP" }))
}
