use thiserror::Error;

/// Errors raised while fetching alerts from Alertmanager
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("bad response code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("alertmanager returned {error_type} error: {message}")]
    Api { error_type: String, message: String },

    #[error("failed to decode alertmanager response: {0}")]
    Decode(String),
}
