//! Crawl engine - depth-bounded traversal orchestration
//!
//! The engine is the only component that drives the traversal; everything
//! else is a request/response collaborator. The depth-first descent runs
//! over an explicit LIFO worklist of [`CrawlTask`] values, which keeps
//! memory bounded and makes the traversal testable apart from I/O.

use crate::cache::CacheStore;
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, Fetcher};
use crate::crawler::visit_log::VisitLog;
use crate::output::OutputStore;
use crate::site::{extract_recipe, SiteRegistry};
use crate::url::domain_of;
use crate::LadleError;
use std::time::{Duration, Instant};
use url::Url;

/// One pending visit
///
/// Depth is strictly increasing along any path from a root; roots are
/// depth 0.
#[derive(Debug, Clone)]
pub struct CrawlTask {
    /// The URL to visit
    pub url: String,

    /// Link-following distance from the seeding root
    pub depth: u32,
}

/// Strictly sequential, depth-first crawl engine
pub struct CrawlEngine {
    config: Config,
    fetcher: Fetcher,
    output: OutputStore,
    registry: SiteRegistry,
    visit_log: VisitLog,
}

impl CrawlEngine {
    /// Creates an engine and its collaborators from the configuration
    pub fn new(config: Config) -> Result<Self, LadleError> {
        let cache = CacheStore::new(&config.storage.cache_dir);
        let output = OutputStore::new(&config.storage.output_dir);
        let visit_log = VisitLog::create(&config.storage.log_dir)?;
        let client = build_http_client(&config.crawler)?;
        let fetcher = Fetcher::new(client, cache, visit_log.clone());

        Ok(Self {
            config,
            fetcher,
            output,
            registry: SiteRegistry::new(),
            visit_log,
        })
    }

    /// Runs the crawl to completion
    ///
    /// Seeds the worklist with the configured root URLs (blank entries are
    /// skipped), then processes tasks depth-first. A fetch failure abandons
    /// only that URL's subtree; output persistence failures stop the run.
    pub async fn run(&mut self) -> Result<(), LadleError> {
        let mut worklist = self.seed_worklist();
        tracing::info!(
            "Starting crawl: {} seeds, max depth {}",
            worklist.len(),
            self.config.crawler.max_depth
        );

        let started = Instant::now();
        let mut pages_visited = 0u64;
        let mut recipes_saved = 0u64;

        while let Some(task) = worklist.pop() {
            // Terminal without fetching, no side effects
            if task.depth > self.config.crawler.max_depth {
                continue;
            }

            // Inter-request pause; the only rate limiting. Roots are exempt.
            if task.depth > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.crawler.request_delay_ms))
                    .await;
            }

            // Record the visit before the fetch attempt, regardless of outcome
            self.visit_log.record(&task.url)?;
            pages_visited += 1;

            let base = match Url::parse(&task.url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Skipping unparseable URL {}: {}", task.url, e);
                    continue;
                }
            };
            let Some(domain) = domain_of(&base) else {
                tracing::warn!("Skipping URL without host: {}", task.url);
                continue;
            };

            let page = match self.fetcher.fetch(&task.url).await {
                Ok(page) => page,
                Err(e) => {
                    // Fatal for this subtree only; siblings continue
                    tracing::error!("Abandoning {}: {}", task.url, e);
                    self.visit_log.record(&format!("fetch failed: {e}"))?;
                    continue;
                }
            };
            tracing::debug!(
                "Visited {} (depth {}, cached: {})",
                task.url,
                task.depth,
                page.from_cache
            );

            let rules = self.registry.for_domain(&domain);
            if rules.is_recipe_page(&page.document) {
                let recipe = extract_recipe(&task.url, &page.document);
                if !recipe.ingredients.is_empty() {
                    recipes_saved += 1;
                }
                self.output.append_recipe(&domain, &recipe)?;
            } else {
                // Children pushed in reverse so the LIFO worklist visits
                // them in document order
                for link in rules.recipe_links(&page.document, &base).into_iter().rev() {
                    worklist.push(CrawlTask {
                        url: link,
                        depth: task.depth + 1,
                    });
                }
            }

            if pages_visited % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages visited, {} recipes saved, {} queued",
                    pages_visited,
                    recipes_saved,
                    worklist.len()
                );
            }
        }

        tracing::info!(
            "Crawl completed: {} pages visited, {} recipes saved in {:?}",
            pages_visited,
            recipes_saved,
            started.elapsed()
        );

        Ok(())
    }

    /// Builds the initial worklist from the configured seeds
    ///
    /// Empty and whitespace-only entries are skipped. Seeds are pushed in
    /// reverse so they are crawled in configuration order.
    fn seed_worklist(&self) -> Vec<CrawlTask> {
        self.config
            .seeds
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .rev()
            .map(|url| CrawlTask {
                url: url.to_string(),
                depth: 0,
            })
            .collect()
    }

    /// Returns the path of this run's visit log
    pub fn visit_log_path(&self) -> &std::path::Path {
        self.visit_log.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CrawlerConfig, StorageConfig};
    use tempfile::TempDir;

    fn test_config(tmp: &TempDir, seeds: Vec<String>) -> Config {
        Config {
            seeds,
            crawler: CrawlerConfig {
                request_delay_ms: 0,
                ..CrawlerConfig::default()
            },
            storage: StorageConfig {
                cache_dir: tmp.path().join("cache").display().to_string(),
                output_dir: tmp.path().join("output").display().to_string(),
                log_dir: tmp.path().join("log").display().to_string(),
            },
        }
    }

    #[test]
    fn test_seed_worklist_skips_blank_entries() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(
            &tmp,
            vec![
                "https://example.com/a".to_string(),
                "   ".to_string(),
                String::new(),
                "https://example.com/b".to_string(),
            ],
        );
        let engine = CrawlEngine::new(config).unwrap();

        let worklist = engine.seed_worklist();
        assert_eq!(worklist.len(), 2);
        // LIFO: the first configured seed must be popped first
        assert_eq!(worklist.last().unwrap().url, "https://example.com/a");
        assert!(worklist.iter().all(|t| t.depth == 0));
    }

    #[tokio::test]
    async fn test_run_with_unreachable_seed_completes() {
        let tmp = TempDir::new().unwrap();
        // Closed port: fetch fails, branch is abandoned, run still succeeds
        let config = test_config(&tmp, vec!["http://127.0.0.1:1/".to_string()]);
        let mut engine = CrawlEngine::new(config).unwrap();

        assert!(engine.run().await.is_ok());

        let log = std::fs::read_to_string(engine.visit_log_path()).unwrap();
        assert!(log.lines().any(|l| l == "http://127.0.0.1:1/"));
        assert!(log.lines().any(|l| l.starts_with("fetch failed:")));
    }
}
