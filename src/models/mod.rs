//! Core data models for content acquisition and validation.

mod content;
mod verdict;

pub use content::{ExtractedContent, SourceKind};
pub use verdict::{ContentType, ValidationVerdict};
