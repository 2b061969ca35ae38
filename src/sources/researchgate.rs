//! ResearchGate extraction rules.
//!
//! Publication pages carry the useful text in the page heading and the
//! meta description; the body itself is rendered client-side and is not
//! worth pattern-matching.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::ExtractedContent;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.+?)</h1>").expect("valid regex"));

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name="description"[^>]*content="([^"]+)""#).expect("valid regex")
});

/// Page heading as title, meta description as description. Both optional.
pub fn extract(html: &str) -> ExtractedContent {
    let title = TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| super::strip_tags(m.as_str()));

    let description = DESCRIPTION_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string());

    ExtractedContent {
        title,
        description,
        ..Default::default()
    }
}
