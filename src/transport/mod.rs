//! Outbound transport seam.
//!
//! The fetcher never talks to the network directly: it hands a
//! [`FetchRequest`] to a [`Transport`] and gets back a [`FetchResponse`]
//! whose body has not been read yet. [`HyperTransport`] is the real
//! implementation; tests substitute their own.

mod client;

pub use client::HyperTransport;

use crate::http::{BoxError, FetchRequest, FetchResponse};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Something that can send a single HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the response head with an unread body.
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Failure to obtain a response at all.
#[derive(Debug)]
pub enum TransportError {
    /// The request could not be built (bad URL, bad header).
    InvalidRequest(String),
    /// Connecting, writing the request or reading the response head failed.
    Connection(BoxError),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
            TransportError::Connection(err) => write!(f, "connection failed: {}", err),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::InvalidRequest(_) => None,
            // The connection error's message is already part of `Display`.
            TransportError::Connection(err) => std::error::Error::source(err.as_ref()),
        }
    }
}
