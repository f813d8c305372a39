//! HTTP API for Blueprint.
//!
//! Exposes one endpoint per planning use-case plus a health check. Raw model
//! output never leaves the process; failures are reported with a generic
//! message and logged.

mod api;
mod config;
mod error;
mod serve;

pub use api::{AppStructureRequest, ApiState, FeatureTreeRequest, SummaryRequest, create_router};
pub use config::{ENV_PREFIX, ListenSettings, LogSettings, ServerConfig};
pub use error::{ApiError, ServerError, ServerErrorKind};
pub use serve::{serve_until, shutdown_signal};
