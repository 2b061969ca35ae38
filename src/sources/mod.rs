//! Per-source retrieval strategies and extraction rules.
//!
//! Each source kind gets a module holding its candidate-URL construction
//! and its fixed, ordered extraction patterns:
//!
//! - [`arxiv`] - abstract page, export mirror, direct PDF
//! - [`researchgate`] - publication page heading and meta description
//! - [`web`] - title, meta description, first main-content block
//!
//! The set of kinds is closed, so dispatch is a plain match on
//! [`SourceKind`] rather than a trait object. [`ContentRouter`] drives the
//! classify → candidates → fetch → extract loop.

pub mod arxiv;
pub mod researchgate;
mod router;
pub mod web;

pub use router::ContentRouter;

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ExtractedContent, SourceKind};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Build the ordered candidate URL list for a classified URL.
///
/// arXiv gets the abstract page, the export mirror, and the direct PDF in
/// that fixed preference order; other kinds fetch the original URL only.
/// `None` means no candidate exists (an arXiv URL without a parseable
/// paper id) and acquisition stops without a network call.
pub fn candidates(url: &str, kind: SourceKind) -> Option<Vec<String>> {
    match kind {
        SourceKind::Arxiv => arxiv::candidates(url),
        SourceKind::ResearchGate | SourceKind::General => Some(vec![url.to_string()]),
    }
}

/// Extract structured fields from one page per the source kind's rules.
///
/// Returns a fresh [`ExtractedContent`]; an instance with no matched
/// field renders to an empty string, which the router's length gate
/// rejects naturally.
pub fn extract(html: &str, kind: SourceKind) -> ExtractedContent {
    match kind {
        SourceKind::Arxiv => arxiv::extract(html),
        SourceKind::ResearchGate => researchgate::extract(html),
        SourceKind::General => web::extract(html),
    }
}

/// Strip markup tags outright and trim. Used for single-line fields.
pub(crate) fn strip_tags(fragment: &str) -> String {
    TAG_RE.replace_all(fragment, "").trim().to_string()
}

/// Replace markup tags with spaces, collapse whitespace runs, and trim.
/// Used for flowing text where tags separate words.
pub(crate) fn clean_fragment(fragment: &str) -> String {
    let spaced = TAG_RE.replace_all(fragment, " ");
    WS_RE.replace_all(&spaced, " ").trim().to_string()
}
