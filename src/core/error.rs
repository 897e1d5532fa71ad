//! Errors surfaced by the quote client

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// No access key was configured; no request is sent.
    #[error("access key is empty")]
    MissingAccessKey,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("incorrect response status code: {0}")]
    Status(StatusCode),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The provider answered with `success: false`. Only the error type is
    /// part of the message.
    #[error("{kind}")]
    Provider { code: i64, kind: String, info: String },
}
