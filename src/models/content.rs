//! Source classification and extracted-content models.

use serde::{Deserialize, Serialize};

/// The shape of a content provider, derived from the URL alone.
///
/// Classification is a pure function of the URL string: a case-insensitive
/// substring match, with arXiv checked before ResearchGate and everything
/// else falling through to [`SourceKind::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// arXiv preprint pages (abs/pdf URLs)
    Arxiv,
    /// ResearchGate publication pages
    ResearchGate,
    /// Any other web page
    General,
}

impl SourceKind {
    /// Classify a URL into a source kind.
    pub fn classify(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("arxiv.org") {
            SourceKind::Arxiv
        } else if url.contains("researchgate.net") {
            SourceKind::ResearchGate
        } else {
            SourceKind::General
        }
    }

    /// Returns the source identifier (used in log prefixes)
    pub fn id(&self) -> &str {
        match self {
            SourceKind::Arxiv => "arxiv",
            SourceKind::ResearchGate => "researchgate",
            SourceKind::General => "general",
        }
    }

    /// Returns the display name of the source kind
    pub fn name(&self) -> &str {
        match self {
            SourceKind::Arxiv => "arXiv",
            SourceKind::ResearchGate => "ResearchGate",
            SourceKind::General => "General",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structured fragments pulled out of one page.
///
/// Each extraction attempt builds a fresh instance; fields that no pattern
/// matched stay `None`. [`ExtractedContent::render`] produces the labeled
/// plain-text form consumed by the router's length gate and the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Page or paper title
    pub title: Option<String>,
    /// Paper abstract (arXiv pages)
    pub abstract_text: Option<String>,
    /// Meta description (ResearchGate and general pages)
    pub description: Option<String>,
    /// Excerpt of the main body (general pages only)
    pub body_excerpt: Option<String>,
}

impl ExtractedContent {
    /// True when no pattern matched any field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.abstract_text.is_none()
            && self.description.is_none()
            && self.body_excerpt.is_none()
    }

    /// Render the matched fields as labeled sections joined by blank lines.
    ///
    /// Returns an empty string when nothing matched — a normal outcome,
    /// rejected downstream by the router's qualifying-length gate.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        if let Some(title) = &self.title {
            parts.push(format!("Title: {}", title));
        }
        if let Some(abstract_text) = &self.abstract_text {
            parts.push(format!("Abstract: {}", abstract_text));
        }
        if let Some(description) = &self.description {
            parts.push(format!("Description: {}", description));
        }
        if let Some(body) = &self.body_excerpt {
            parts.push(format!("Content: {}", body));
        }
        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_arxiv() {
        assert_eq!(
            SourceKind::classify("https://arxiv.org/abs/2301.12345"),
            SourceKind::Arxiv
        );
        assert_eq!(
            SourceKind::classify("https://ARXIV.org/pdf/2301.12345"),
            SourceKind::Arxiv
        );
    }

    #[test]
    fn test_classify_researchgate() {
        assert_eq!(
            SourceKind::classify("https://www.researchgate.net/publication/12345"),
            SourceKind::ResearchGate
        );
    }

    #[test]
    fn test_classify_general_fallback() {
        assert_eq!(
            SourceKind::classify("https://example.com/article"),
            SourceKind::General
        );
    }

    #[test]
    fn test_arxiv_wins_over_researchgate() {
        // Both markers present: highest-specificity (arXiv) wins
        assert_eq!(
            SourceKind::classify("https://arxiv.org/abs/2301.12345?via=researchgate.net"),
            SourceKind::Arxiv
        );
    }

    #[test]
    fn test_render_empty() {
        let content = ExtractedContent::default();
        assert!(content.is_empty());
        assert_eq!(content.render(), "");
    }

    #[test]
    fn test_render_labeled_sections() {
        let content = ExtractedContent {
            title: Some("Attention Is All You Need".to_string()),
            abstract_text: Some("We propose a new architecture.".to_string()),
            ..Default::default()
        };
        assert_eq!(
            content.render(),
            "Title: Attention Is All You Need\n\nAbstract: We propose a new architecture."
        );
    }
}
