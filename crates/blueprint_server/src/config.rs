//! Layered server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `BLUEPRINT__`-prefixed environment variables using `__` as the
//! nesting separator (e.g. `BLUEPRINT__LISTEN__PORT=9000`).

use crate::{ServerError, ServerErrorKind};
use blueprint_core::LogFormat;
use blueprint_models::{BackendConfig, api_key_from_lookup};
use blueprint_planning::{PlannerSettings, RetryPolicy};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, warn};

/// Environment prefix for layered overrides.
pub const ENV_PREFIX: &str = "BLUEPRINT";

/// Address the HTTP server listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ListenSettings {
    /// Interface to bind
    host: String,
    /// TCP port
    port: u16,
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is unset
    filter: String,
    /// `pretty` or `json`
    format: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LogSettings {
    /// Parsed output format.
    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_name(&self.format)
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener
    listen: ListenSettings,
    /// Logging
    log: LogSettings,
    /// Chat-completion backend
    backend: BackendConfig,
    /// Caller-side retries
    retry: RetryPolicy,
}

impl ServerConfig {
    /// Load configuration from defaults, `path` (if it exists) and the environment.
    ///
    /// A backend API key absent from every layer falls back to
    /// `BLUEPRINT_API_KEY`, then `NVIDIA_NIM_API_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerError> {
        Self::load_from_vars(path, std::env::vars())
    }

    /// Same as [`ServerConfig::load`], reading variables from `vars` instead
    /// of the process environment.
    pub fn load_from_vars<I>(path: Option<&Path>, vars: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: config::Map<String, String> = vars.into_iter().collect();
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                debug!(path = %path.display(), "Loading configuration file");
            } else {
                warn!(path = %path.display(), "Configuration file not found, using defaults");
            }
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .build()
            .map_err(|e| ServerError::new(ServerErrorKind::Configuration(e.to_string())))?;

        let mut loaded: Self = settings
            .try_deserialize()
            .map_err(|e| ServerError::new(ServerErrorKind::Configuration(e.to_string())))?;

        if loaded.backend.api_key().is_none() {
            let fallback = api_key_from_lookup(|name| vars.get(name).cloned());
            loaded.backend = loaded.backend.with_api_key(fallback);
        }

        Ok(loaded)
    }

    /// Load configuration from a TOML string, without environment overrides.
    pub fn from_toml_str(contents: &str) -> Result<Self, ServerError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| ServerError::new(ServerErrorKind::Configuration(e.to_string())))
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.listen.host, self.listen.port)
            .parse()
            .map_err(|e| {
                ServerError::new(ServerErrorKind::Configuration(format!(
                    "Invalid listen address {}:{}: {}",
                    self.listen.host, self.listen.port, e
                )))
            })
    }

    /// Planner settings derived from the backend parameters and retry policy.
    pub fn planner_settings(&self) -> PlannerSettings {
        PlannerSettings::new(*self.backend.parameters(), self.retry.clone())
    }

    /// Returns a copy with the listen port replaced.
    pub fn with_port(mut self, port: u16) -> Self {
        self.listen.port = port;
        self
    }
}
