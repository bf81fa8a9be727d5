use serde::Deserialize;

/// Main configuration structure for Ladle
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root URLs seeding the crawl at depth 0
    #[serde(default)]
    pub seeds: Vec<String>,

    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum link-following depth from a root URL (roots are depth 0)
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Pause before each non-root fetch (milliseconds)
    #[serde(rename = "request-delay", default = "default_request_delay")]
    pub request_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "fetch-timeout", default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Filesystem locations used by the crawler
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one cached file per fetched page
    #[serde(rename = "cache-dir", default = "default_cache_dir")]
    pub cache_dir: String,

    /// Directory holding one XML document per source domain
    #[serde(rename = "output-dir", default = "default_output_dir")]
    pub output_dir: String,

    /// Directory holding one append-only visit log per crawl run
    #[serde(rename = "log-dir", default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            request_delay_ms: default_request_delay(),
            fetch_timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            output_dir: default_output_dir(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_max_depth() -> u32 {
    2
}

fn default_request_delay() -> u64 {
    3000
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    String::from("ladle/0.1")
}

fn default_cache_dir() -> String {
    String::from("./cache")
}

fn default_output_dir() -> String {
    String::from("./output")
}

fn default_log_dir() -> String {
    String::from("./log")
}
