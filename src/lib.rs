//! # Content Triage
//!
//! Retrieves textual content for a URL through source-aware fallback
//! strategies and decides whether the result is genuine article text or a
//! disguised failure (error page, access-denied notice, truncated
//! fragment, encoding garbage).
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: core data structures (SourceKind, ExtractedContent, ValidationVerdict)
//! - [`sources`]: per-source candidate strategies, extraction rules, and the router
//! - [`validate`]: weighted rule-based response validator
//! - [`utils`]: HTTP client with multi-encoding decode fallback
//! - [`config`]: configuration management

pub mod config;
pub mod models;
pub mod sources;
pub mod utils;
pub mod validate;

// Re-export commonly used types
pub use models::{ContentType, ExtractedContent, SourceKind, ValidationVerdict};
pub use sources::ContentRouter;
pub use validate::{validate, validate_batch, ValidationSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
