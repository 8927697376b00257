//! Listener settings for the registry's HTTP server.
//!
//! Lives under the `server` key of the configuration file. `host` and
//! `port` can be overridden from the command line.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found by [`HttpServerConfig::validate`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListenerConfigError {
    #[error("server.host must not be empty")]
    EmptyHost,

    #[error("server.port must be > 0")]
    ZeroPort,

    #[error("server.cors_origins entry '{0}' is not an http(s) origin")]
    BadOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to listen on. IPv6 literals may be written bare (`::1`).
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the API. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Address handed to `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Replace `host` and `port` where an override is given.
    pub fn override_listener(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    pub fn validate(&self) -> Result<(), ListenerConfigError> {
        if self.host.trim().is_empty() {
            return Err(ListenerConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ListenerConfigError::ZeroPort);
        }
        if let Some(bad) = self.cors_origins.iter().find(|o| !is_origin(o)) {
            return Err(ListenerConfigError::BadOrigin(bad.clone()));
        }
        Ok(())
    }
}

fn is_origin(origin: &str) -> bool {
    (origin.starts_with("http://") || origin.starts_with("https://"))
        && HeaderValue::from_str(origin).is_ok()
}
