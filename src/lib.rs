//! Greeting and health-check HTTP service.
//!
//! Two routes, both answering with fixed JSON:
//!
//! ```text
//! GET /        {"message": "...", "version": "1.0", "api_key_status": "Set (Hidden)" | "Not Set"}
//! GET /health  {"status": "UP"}
//! ```
//!
//! The root route reports whether `API_KEY` is set, never its value.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers and router
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
