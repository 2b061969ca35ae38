//! Validation verdict model.

use serde::{Deserialize, Serialize};

/// Coarse classification of what a piece of text appears to be.
///
/// Independent of the validity score; decided by a fixed priority chain
/// (URL marker, then research keywords, then news keywords, then plain
/// text). `Empty` is reserved for the empty-input verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Academic,
    Research,
    News,
    Text,
    Empty,
}

impl ContentType {
    pub fn id(&self) -> &str {
        match self {
            ContentType::Academic => "academic",
            ContentType::Research => "research",
            ContentType::News => "news",
            ContentType::Text => "text",
            ContentType::Empty => "empty",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The outcome of validating one piece of acquired text.
///
/// Constructed once per validation call and never mutated afterwards.
/// `confidence_score` is always clamped to `[0.0, 1.0]`; `issues` keeps
/// first-detected order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Final decision: the score threshold and issue-count gate, with the
    /// error-pattern and too-short issues acting as hard vetoes
    pub is_valid: bool,

    /// Heuristic confidence in `[0.0, 1.0]`
    pub confidence_score: f64,

    /// Detected issues, in the order the rules fired
    pub issues: Vec<String>,

    /// Coarse content classification
    pub content_type: ContentType,

    /// Length of the validated text in characters
    pub length: usize,

    /// How many distinct positive-indicator patterns matched
    pub positive_indicator_count: usize,
}
