// src/errors.rs

use thiserror::Error;

pub type WstailResult<T> = Result<T, WstailError>;

#[derive(Debug, Error)]
pub enum WstailError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("failed to connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("status request failed: {0}")]
    Status(#[from] reqwest::Error),
}

impl WstailError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        WstailError::Config(msg.into())
    }
}
