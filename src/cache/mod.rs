//! Content-addressed page cache
//!
//! This module persists the rendered text of fetched pages on disk, one file
//! per page, keyed by a stable hash of the source URL. Reads distinguish a
//! plain miss from a recoverable anomaly (unreadable, undecodable, or empty
//! entries) so the caller can log the anomaly and fall back to the network.

mod key;
mod store;

pub use key::cache_key;
pub use store::{CacheError, CacheStore, CachedPage};
