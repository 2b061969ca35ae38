//! General-purpose extraction rules for arbitrary web pages.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::ExtractedContent;

/// A main-content block is only worth keeping past this many chars
const BODY_MIN_CHARS: usize = 100;
/// Kept excerpt size
const BODY_EXCERPT_CHARS: usize = 1000;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.+?)</title>").expect("valid regex"));

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name="description"[^>]*content="([^"]+)""#).expect("valid regex")
});

/// Main-content container patterns, in preference order. The first match
/// wins; the rest are not tried.
static CONTENT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)<main[^>]*>(.+?)</main>",
        r"(?is)<article[^>]*>(.+?)</article>",
        r#"(?is)<div[^>]*class="[^"]*content[^"]*"[^>]*>(.+?)</div>"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Document title, meta description, and an excerpt of the first matching
/// main-content block.
pub fn extract(html: &str) -> ExtractedContent {
    let title = TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| super::strip_tags(m.as_str()));

    let description = DESCRIPTION_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string());

    let body_excerpt = CONTENT_RES
        .iter()
        .find_map(|re| re.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| super::clean_fragment(m.as_str()))
        .filter(|body| body.chars().count() > BODY_MIN_CHARS)
        .map(|body| {
            let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
            format!("{}...", excerpt)
        });

    ExtractedContent {
        title,
        description,
        body_excerpt,
        ..Default::default()
    }
}
