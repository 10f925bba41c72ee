//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::error::ServiceError;

/// Application configuration loaded from environment variables.
///
/// `API_KEY` is not part of the configuration: the root handler reads it
/// on every request so responses follow the live environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Observability ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,

    /// Port for the Prometheus scrape endpoint. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rust_log: default_log_level(),
            log_json: false,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, host: Option<IpAddr>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.port == 0 {
            return Err(ServiceError::InvalidConfig("PORT must not be 0".to_string()));
        }

        match self.metrics_port {
            Some(0) => Err(ServiceError::InvalidConfig(
                "METRICS_PORT must not be 0".to_string(),
            )),
            Some(p) if p == self.port => Err(ServiceError::InvalidConfig(format!(
                "METRICS_PORT must differ from PORT ({p})"
            ))),
            _ => Ok(()),
        }
    }

    /// Tracing filter directives; `verbose` raises this crate to debug.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            "greeting_service=debug,info".to_string()
        } else {
            self.rust_log.clone()
        }
    }

    /// Socket address the HTTP server listens on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Socket address of the metrics endpoint, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        self.metrics_port.map(|port| SocketAddr::new(self.host, port))
    }
}
