//! arXiv retrieval strategies and extraction rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::ExtractedContent;

/// Abstract pages
const ARXIV_ABS_URL: &str = "https://arxiv.org/abs";
/// Export mirror, often reachable when the main site throttles
const ARXIV_EXPORT_URL: &str = "https://export.arxiv.org/abs";
/// Direct PDF documents
const ARXIV_PDF_URL: &str = "https://arxiv.org/pdf";

/// New-style arXiv identifiers: four digits, dot, four or five digits
static PAPER_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"arxiv\.org/(?:pdf|abs)/([0-9]{4}\.[0-9]{4,5})").expect("valid regex")
});

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<h1[^>]*class="title"[^>]*>.*?<span[^>]*>(.+?)</span>"#)
        .expect("valid regex")
});

static ABSTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<blockquote[^>]*class="abstract"[^>]*>.*?<span[^>]*>Abstract:</span>\s*(.+?)</blockquote>"#,
    )
    .expect("valid regex")
});

/// Pull the paper id out of an abs/pdf URL.
pub fn parse_id(url: &str) -> Option<&str> {
    PAPER_ID_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Ordered candidate URLs for an arXiv paper.
///
/// `None` when the URL carries no parseable id — a malformed identifier is
/// a hard stop, not a fallback trigger.
pub fn candidates(url: &str) -> Option<Vec<String>> {
    let id = parse_id(url)?;
    Some(vec![
        format!("{}/{}", ARXIV_ABS_URL, id),
        format!("{}/{}", ARXIV_EXPORT_URL, id),
        format!("{}/{}.pdf", ARXIV_PDF_URL, id),
    ])
}

/// Title from the heading marked `class="title"`, abstract from the
/// blockquote marked `class="abstract"`. Both optional.
pub fn extract(html: &str) -> ExtractedContent {
    let title = TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| super::strip_tags(m.as_str()));

    let abstract_text = ABSTRACT_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| super::clean_fragment(m.as_str()));

    ExtractedContent {
        title,
        abstract_text,
        ..Default::default()
    }
}
