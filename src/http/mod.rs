//! HTTP types providing a fetch-like API for outbound requests.

mod request;
mod response;

pub use request::{FetchRequest, Method};
pub use response::{BoxError, FetchResponse, ResponseBody, StatusCode};
