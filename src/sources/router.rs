//! Source-aware acquisition routing with ordered candidate fallback.

use tracing::{debug, info, warn};

use crate::config::TriageConfig;
use crate::models::SourceKind;
use crate::sources;
use crate::utils::{FetchError, HttpClient};

/// Routes each URL to its source-specific candidate list and walks the
/// candidates in order until one yields qualifying content.
///
/// Holds only the shared HTTP client and read-only configuration, so a
/// single router can serve any number of sequential acquisitions.
#[derive(Debug, Clone)]
pub struct ContentRouter {
    client: HttpClient,
    config: TriageConfig,
}

impl ContentRouter {
    /// Create a router and its HTTP client from the configuration
    pub fn new(config: TriageConfig) -> Result<Self, FetchError> {
        let client = HttpClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Create with an existing client (shared across components)
    pub fn with_client(client: HttpClient, config: TriageConfig) -> Self {
        Self { client, config }
    }

    /// Acquire plain text for `url`.
    ///
    /// Returns an empty string when the URL is unusable or every candidate
    /// fails or under-qualifies — never an error. Skip-listed domains get
    /// the configured placeholder without any network call.
    pub async fn acquire(&self, url: &str) -> String {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            warn!("invalid URL format: {}", url);
            return String::new();
        }

        let lowered = url.to_lowercase();
        if self
            .config
            .scraping
            .skip_domains
            .iter()
            .any(|domain| lowered.contains(domain.as_str()))
        {
            info!("skipping domain: {}", url);
            return self.config.scraping.skip_placeholder.clone();
        }

        let kind = SourceKind::classify(url);
        info!("[{}] processing: {}", kind.id(), url);

        let Some(candidates) = sources::candidates(url, kind) else {
            warn!("[{}] could not extract paper id from URL: {}", kind.id(), url);
            return String::new();
        };

        self.try_candidates(kind, &candidates).await
    }

    /// Walk the candidate list in order; the first extraction over the
    /// qualifying length wins. A failed candidate is logged and swallowed,
    /// never retried.
    async fn try_candidates(&self, kind: SourceKind, candidates: &[String]) -> String {
        let min_len = self.config.processing.min_content_length;

        for candidate in candidates {
            let html = match self.client.fetch_text(candidate).await {
                Ok(html) => html,
                Err(e) => {
                    debug!("[{}] candidate failed {}: {}", kind.id(), candidate, e);
                    continue;
                }
            };

            let text = sources::extract(&html, kind).render();
            let text_len = text.chars().count();
            if text_len > min_len {
                info!(
                    "[{}] success with candidate: {} ({} chars)",
                    kind.id(),
                    candidate,
                    text_len
                );
                return text;
            }

            debug!(
                "[{}] candidate under-qualified ({} chars): {}",
                kind.id(),
                text_len,
                candidate
            );
        }

        warn!("[{}] all candidates exhausted", kind.id());
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> ContentRouter {
        ContentRouter::new(TriageConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_non_http_schemes() {
        let r = router();
        assert_eq!(r.acquire("ftp://example.com/file").await, "");
        assert_eq!(r.acquire("").await, "");
        assert_eq!(r.acquire("example.com/no-scheme").await, "");
    }

    #[tokio::test]
    async fn test_skip_domain_returns_placeholder() {
        let r = router();
        let text = r.acquire("https://go.gale.com/ps/anonymous?id=GALE").await;
        assert_eq!(text, TriageConfig::default().scraping.skip_placeholder);
    }

    #[tokio::test]
    async fn test_skip_domain_case_insensitive() {
        let r = router();
        let text = r.acquire("https://GO.GALE.COM/ps/doc").await;
        assert!(text.starts_with("[PDF Document"));
    }

    #[tokio::test]
    async fn test_arxiv_without_id_is_hard_stop() {
        let r = router();
        assert_eq!(r.acquire("https://arxiv.org/list/cs.AI/recent").await, "");
    }

    #[tokio::test]
    async fn test_fallback_order_first_qualifying_wins() {
        let mut server = mockito::Server::new_async().await;

        let broken = server
            .mock("GET", "/broken")
            .with_status(500)
            .create_async()
            .await;
        let thin = server
            .mock("GET", "/thin")
            .with_status(200)
            .with_body("<html><title>t</title></html>")
            .create_async()
            .await;
        let body = "real text ".repeat(30);
        let good = server
            .mock("GET", "/good")
            .with_status(200)
            .with_body(format!(
                "<html><title>Good</title><body><main>{}</main></body></html>",
                body
            ))
            .create_async()
            .await;
        let unreached = server
            .mock("GET", "/unreached")
            .with_status(200)
            .with_body("<html><title>never fetched</title></html>")
            .expect(0)
            .create_async()
            .await;

        let r = router();
        let candidates = vec![
            format!("{}/broken", server.url()),
            format!("{}/thin", server.url()),
            format!("{}/good", server.url()),
            format!("{}/unreached", server.url()),
        ];
        let text = r.try_candidates(SourceKind::General, &candidates).await;

        assert!(text.contains("Title: Good"));
        assert!(text.contains("real text"));
        broken.assert_async().await;
        thin.assert_async().await;
        good.assert_async().await;
        unreached.assert_async().await;
    }

    #[tokio::test]
    async fn test_exhausted_candidates_yield_empty() {
        let mut server = mockito::Server::new_async().await;
        let _a = server
            .mock("GET", "/a")
            .with_status(404)
            .create_async()
            .await;
        let _b = server
            .mock("GET", "/b")
            .with_status(200)
            .with_body("no markup here")
            .create_async()
            .await;

        let r = router();
        let candidates = vec![
            format!("{}/a", server.url()),
            format!("{}/b", server.url()),
        ];
        assert_eq!(r.try_candidates(SourceKind::General, &candidates).await, "");
    }

    #[tokio::test]
    async fn test_acquire_general_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let body = "a sentence of article text ".repeat(10);
        let _page = server
            .mock("GET", "/post")
            .with_status(200)
            .with_body(format!(
                r#"<html><head><title>Post</title>
                <meta name="description" content="A post about things.">
                </head><body><article>{}</article></body></html>"#,
                body
            ))
            .create_async()
            .await;

        let r = router();
        let text = r.acquire(&format!("{}/post", server.url())).await;

        assert!(text.starts_with("Title: Post"));
        assert!(text.contains("Description: A post about things."));
        assert!(text.contains("Content: a sentence of article text"));
    }
}
