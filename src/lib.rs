//! Ladle: a depth-bounded recipe crawler
//!
//! This crate implements a small, strictly sequential web crawler specialized
//! for recipe websites. Starting from a set of root URLs it follows links up
//! to a fixed depth, distinguishes listing pages from recipe pages, extracts
//! ingredient lists, and persists them grouped by source domain. Fetched
//! pages are kept in a content-addressed on-disk cache so repeated crawls
//! avoid re-fetching previously seen pages.

pub mod cache;
pub mod config;
pub mod crawler;
pub mod output;
pub mod site;
pub mod url;

use thiserror::Error;

/// Main error type for Ladle operations
#[derive(Debug, Error)]
pub enum LadleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Cache error: {0}")]
    Cache(#[from] cache::CacheError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),
}

/// Result type alias for Ladle operations
pub type Result<T> = std::result::Result<T, LadleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use cache::{cache_key, CacheStore, CachedPage};
pub use config::Config;
pub use crawler::crawl;
pub use site::Recipe;
pub use url::{collapse_domain, domain_of};
