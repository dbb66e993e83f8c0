//! # userfetch - fetch-like user record client
//!
//! `userfetch` retrieves user records from `GET /api/users/{id}` and returns
//! them as open-ended JSON objects. It offers two contracts:
//!
//! - **permissive**: send whatever ID is given, decode whatever comes back.
//!   Status codes and the record's shape are not checked.
//! - **validating**: reject an empty ID without touching the network,
//!   reject any status other than `200 OK`, and reject records missing
//!   `id` or `name`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   FetchRequest    ┌──────────────────┐   GET    ┌───────────┐
//! │ UserFetcher  │ ────────────────▶ │ Transport        │ ───────▶ │ users API │
//! │ (validation, │ ◀──────────────── │ (HyperTransport, │ ◀─────── │           │
//! │  decoding)   │   FetchResponse   │  or a test mock) │          └───────────┘
//! └──────────────┘                   └──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use userfetch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = FetcherConfig::new().base_url("http://127.0.0.1:8080");
//!     let fetcher = UserFetcher::new(HyperTransport::new(), config);
//!
//!     match fetcher.fetch_validated("123").await {
//!         Ok(user) => println!("user: {}", user),
//!         Err(FetchError::UnexpectedStatus(status)) => println!("server said {}", status),
//!         Err(e) => return Err(e.into()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod fetcher;
pub mod http;
pub mod transport;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::fetcher::{FetchError, FetchMode, FetcherConfig, UserFetcher, UserRecord};
    pub use crate::http::{FetchRequest, FetchResponse, StatusCode};
    pub use crate::transport::{HyperTransport, Transport, TransportError};
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use fetcher::{FetchError, FetchMode, FetcherConfig, UserFetcher, UserRecord};
pub use transport::{HyperTransport, Transport};
