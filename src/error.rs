use crate::client::QueryError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors that end an `alert-query` invocation
#[derive(Debug, Error)]
pub enum Error {
    #[error("required flag --alertmanager.url not provided")]
    MissingAlertmanagerUrl,

    #[error("invalid alertmanager URL '{url}': {reason}")]
    InvalidAlertmanagerUrl { url: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    QueryFailed(#[from] QueryError),

    #[error("unknown output formatter '{name}' (available: {available})")]
    UnknownFormatter { name: String, available: String },

    /// Failure reported by a renderer, passed through untouched
    #[error(transparent)]
    Render(anyhow::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
