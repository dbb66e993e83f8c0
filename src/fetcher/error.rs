//! Error type for user fetches.

use crate::fetcher::record::UserRecord;
use crate::http::StatusCode;
use crate::transport::TransportError;
use std::fmt;
use std::io;

/// Why a fetch failed.
#[derive(Debug)]
pub enum FetchError {
    /// The user ID was empty. No request was sent.
    MissingInput,
    /// No response was obtained.
    Transport(TransportError),
    /// The server answered with something other than 200 OK.
    UnexpectedStatus(StatusCode),
    /// The response body could not be read.
    Io(io::Error),
    /// The body was not a JSON object.
    Decode(serde_json::Error),
    /// The record lacks `id` or `name`.
    InvalidShape(UserRecord),
}

impl FetchError {
    /// The status code for `UnexpectedStatus` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }

    /// The offending record for `InvalidShape` errors.
    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            FetchError::InvalidShape(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingInput => write!(f, "user ID is required"),
            FetchError::Transport(err) => write!(f, "{}", err),
            FetchError::UnexpectedStatus(status) => write!(f, "HTTP error, status: {}", status),
            FetchError::Io(err) => write!(f, "failed to read response body: {}", err),
            FetchError::Decode(err) => write!(f, "failed to decode user data: {}", err),
            FetchError::InvalidShape(record) => {
                write!(f, "invalid user data received: {}", record)
            }
        }
    }
}

/// `Display` already includes the wrapped error's message, so `source`
/// continues from the wrapped error's own cause.
impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) => std::error::Error::source(err),
            FetchError::Io(err) => std::error::Error::source(err),
            FetchError::Decode(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport(err)
    }
}

impl From<io::Error> for FetchError {
    fn from(err: io::Error) -> Self {
        FetchError::Io(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err)
    }
}
