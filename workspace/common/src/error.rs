use std::future::Future;
use std::time::Duration;

use futures::future::{Either, select};
use thiserror::Error;

/// Failure of a single business-plan API call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with a non-success status
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },

    /// The client-side deadline passed before a response arrived
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The request never produced a response (DNS, CORS, connection reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// The body could not be parsed into the expected payload
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Coarse classification used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    ClientError,
    ServerError,
    Timeout,
    Transport,
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn classify(&self) -> ErrorClass {
        match self {
            RequestError::Status { status: 404, .. } => ErrorClass::NotFound,
            RequestError::Status { status, .. } if *status >= 500 => ErrorClass::ServerError,
            RequestError::Status { .. } => ErrorClass::ClientError,
            RequestError::Timeout(_) => ErrorClass::Timeout,
            RequestError::Network(_) | RequestError::Decode(_) => ErrorClass::Transport,
        }
    }

    /// Emit the classification at the matching level. Does not alter the error.
    pub fn log_classification(&self) {
        match self.classify() {
            ErrorClass::NotFound => tracing::warn!("Resource not found"),
            ErrorClass::ServerError => tracing::error!("Server error occurred"),
            ErrorClass::Timeout => tracing::error!("Request timeout"),
            ErrorClass::ClientError | ErrorClass::Transport => {}
        }
    }
}

/// Run `exchange` to completion unless `deadline` resolves first.
///
/// `exchange` must cover the whole request, body included: a server that
/// sends headers and then stalls is only cut off if the read is inside it.
pub async fn within_deadline<F, D>(exchange: F, deadline: D, timeout: Duration) -> Result<F::Output, RequestError>
where
    F: Future,
    D: Future<Output = ()>,
{
    match select(Box::pin(exchange), Box::pin(deadline)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(RequestError::Timeout(timeout)),
    }
}
