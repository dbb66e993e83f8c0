//! Fetch-like HTTP response type with a lazily read body.

use bytes::{Bytes, BytesMut};
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io;

/// Boxed error type carried by response bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Type-erased response body stream.
pub type ResponseBody = UnsyncBoxBody<Bytes, BoxError>;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl From<hyper::StatusCode> for StatusCode {
    fn from(code: hyper::StatusCode) -> Self {
        StatusCode(code.as_u16())
    }
}

/// Fetch-like HTTP response.
///
/// The body is not read until [`FetchResponse::bytes`] is called. Dropping
/// the response releases the body and its underlying connection.
pub struct FetchResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// HTTP headers.
    pub headers: HashMap<String, String>,
    body: ResponseBody,
}

impl FetchResponse {
    /// Create a response from a status code and a body stream.
    pub fn new(status: impl Into<StatusCode>, body: ResponseBody) -> Self {
        Self {
            status: status.into(),
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a response with an in-memory body.
    pub fn full(status: impl Into<StatusCode>, body: impl Into<Bytes>) -> Self {
        let body = Full::new(body.into())
            .map_err(|never| match never {})
            .boxed_unsync();
        Self::new(status, body)
    }

    /// Read the full body, failing if it is larger than `limit` bytes.
    ///
    /// Reading stops at the first frame that crosses the limit.
    pub async fn bytes(self, limit: usize) -> io::Result<Bytes> {
        let mut body = self.body;
        let mut buf = BytesMut::new();

        while let Some(frame) = body.frame().await {
            let frame = frame.map_err(io::Error::other)?;
            // Trailers carry no payload.
            let Ok(data) = frame.into_data() else {
                continue;
            };
            if buf.len() + data.len() > limit {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("response body exceeds {} bytes", limit),
                ));
            }
            buf.extend_from_slice(&data);
        }

        Ok(buf.freeze())
    }
}

impl fmt::Debug for FetchResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
