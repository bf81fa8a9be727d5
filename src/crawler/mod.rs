//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - Cache-first HTTP fetching with charset decoding
//! - The append-only per-run visit log
//! - The depth-bounded, strictly sequential crawl engine

mod decode;
mod engine;
mod fetcher;
mod visit_log;

pub use decode::{charset_from_content_type, decode_body};
pub use engine::{CrawlEngine, CrawlTask};
pub use fetcher::{build_http_client, FetchedPage, Fetcher};
pub use visit_log::VisitLog;

use crate::config::Config;
use crate::LadleError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Open the cache, output store, and visit log
/// 2. Seed the worklist with the configured root URLs at depth 0
/// 3. Fetch each page from cache or network, depth-first
/// 4. Persist recipes and follow qualifying listing links
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(())` - Crawl completed
/// * `Err(LadleError)` - Setup failed or persistence failed mid-run
pub async fn crawl(config: Config) -> Result<(), LadleError> {
    let mut engine = CrawlEngine::new(config)?;
    engine.run().await
}
