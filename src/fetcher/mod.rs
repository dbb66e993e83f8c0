//! User fetching: configuration, records, errors and the fetcher itself.

pub mod config;
pub mod error;
pub mod record;
pub mod user;

pub use config::{ConfigError, FetchMode, FetcherConfig};
pub use error::FetchError;
pub use record::UserRecord;
pub use user::{UserFetcher, REQUIRED_FIELDS};
