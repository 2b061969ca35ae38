//! Utility modules supporting content acquisition.
//!
//! - [`HttpClient`]: HTTP client with the configured user agent and timeout
//! - [`FetchError`]: errors from a single fetch attempt

mod http;

pub use http::{FetchError, HttpClient};
