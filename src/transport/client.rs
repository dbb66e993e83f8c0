//! Transport implementation over hyper's pooled HTTP/1 client.

use crate::http::{BoxError, FetchRequest, FetchResponse};
use crate::transport::{Transport, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::collections::HashMap;
use tracing::debug;

/// HTTP transport backed by `hyper-util`'s legacy client.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperTransport {
    /// Create a new transport with its own connection pool.
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { client }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, TransportError> {
        let uri: Uri = request
            .url
            .parse()
            .map_err(|e| TransportError::InvalidRequest(format!("{}: {}", request.url, e)))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(TransportError::InvalidRequest(format!(
                "{}: absolute URL required",
                request.url
            )));
        }

        let mut builder = Request::builder().method(request.method.clone()).uri(uri);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let hyper_request = builder
            .body(Full::new(Bytes::new()))
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        debug!("Sending request: {} {}", request.method, request.url);

        let response = self
            .client
            .request(hyper_request)
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?;

        Ok(convert_response(response))
    }
}

/// Convert a hyper Response into a FetchResponse without reading the body.
fn convert_response(response: Response<Incoming>) -> FetchResponse {
    let (parts, body) = response.into_parts();

    let mut headers = HashMap::new();
    for (name, value) in &parts.headers {
        if let Ok(v) = value.to_str() {
            headers.insert(name.as_str().to_string(), v.to_string());
        }
    }

    let body = body.map_err(|e| Box::new(e) as BoxError).boxed_unsync();
    let mut fetch_response = FetchResponse::new(parts.status, body);
    fetch_response.headers = headers;
    fetch_response
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_err;

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_sending() {
        let transport = HyperTransport::new();
        let request = FetchRequest::get("http://localhost/api/users/has space");

        let err = assert_err!(transport.send(request).await);
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_relative_url_is_rejected() {
        let transport = HyperTransport::new();
        let request = FetchRequest::get("/api/users/123");

        let err = assert_err!(transport.send(request).await);
        assert!(matches!(err, TransportError::InvalidRequest(_)));
        assert!(err.to_string().contains("absolute URL required"));
    }
}
