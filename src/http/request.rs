//! Outbound HTTP request type providing a fetch-like API.

use std::collections::HashMap;

pub use hyper::Method;

/// Fetch-like outbound HTTP request.
///
/// Requests never carry a body; the fetcher only issues reads.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// HTTP headers.
    pub headers: HashMap<String, String>,
}

impl FetchRequest {
    /// Create a new FetchRequest.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}
