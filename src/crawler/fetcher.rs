//! Cache-first HTTP fetcher
//!
//! Every fetch consults the page cache before touching the network. Cache
//! anomalies (unreadable, undecodable, or empty entries) are recoverable:
//! they are logged and the page is re-fetched, overwriting the bad entry.
//! Network failures are not retried; they abandon the URL's subtree only.

use crate::cache::CacheStore;
use crate::config::CrawlerConfig;
use crate::crawler::decode::{charset_from_content_type, decode_body};
use crate::crawler::visit_log::VisitLog;
use crate::LadleError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Result of a fetch operation
pub struct FetchedPage {
    /// The parsed page
    pub document: Html,

    /// True when the page was served from the cache without a network call
    pub from_cache: bool,
}

/// Builds the HTTP client used for all fetches
///
/// The per-request timeout bounds fetches that would otherwise block the
/// single crawl thread indefinitely; a timeout is handled like any other
/// fetch failure.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Retrieves pages from the cache store or, on miss, from the network
pub struct Fetcher {
    client: Client,
    cache: CacheStore,
    visit_log: VisitLog,
}

impl Fetcher {
    /// Creates a fetcher over the given client, cache, and run log
    pub fn new(client: Client, cache: CacheStore, visit_log: VisitLog) -> Self {
        Self {
            client,
            cache,
            visit_log,
        }
    }

    /// Fetches a URL, preferring the cache
    ///
    /// On a cache hit the stored text is re-parsed and returned with
    /// `from_cache = true`. On a miss (or recoverable cache anomaly) the
    /// page is downloaded, decoded with its declared charset, parsed,
    /// persisted to the cache, and returned with `from_cache = false`.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, LadleError> {
        match self.cache.get(url) {
            Ok(Some(page)) => {
                tracing::debug!("Cache hit for {}", url);
                return Ok(FetchedPage {
                    document: Html::parse_document(&page.text),
                    from_cache: true,
                });
            }
            Ok(None) => {}
            Err(e) => {
                // Recoverable: log the anomaly and fall through to the network
                tracing::warn!("{}", e);
                self.visit_log.record(&format!("cache anomaly: {e}"))?;
            }
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LadleError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(charset_from_content_type);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_request_error(url, e))?;

        let (text, encoding) = decode_body(&bytes, charset.as_deref());
        let document = Html::parse_document(&text);

        // Persist the re-rendered document so repeated crawls skip the network
        let rendered = document.root_element().html();
        self.cache.put(url, &rendered, &encoding)?;

        Ok(FetchedPage {
            document,
            from_cache: false,
        })
    }
}

/// Maps a reqwest error to the matching fetch error variant
fn classify_request_error(url: &str, e: reqwest::Error) -> LadleError {
    if e.is_timeout() {
        LadleError::Timeout {
            url: url.to_string(),
        }
    } else {
        LadleError::Http {
            url: url.to_string(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CrawlerConfig {
        CrawlerConfig {
            user_agent: "testbot/0.1".to_string(),
            ..CrawlerConfig::default()
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&test_config());
        assert!(client.is_ok());
    }

    // Cache-hit, empty-entry fallback, and network behavior are covered by
    // the wiremock scenarios in tests/crawl_tests.rs.
}
