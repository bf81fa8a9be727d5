use crate::cache::key::cache_key;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by cache reads and writes
///
/// Read-side errors (`Read`, `Decode`, `EmptyEntry`) are recoverable: the
/// caller is expected to log them and treat the lookup as a miss.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to read cached entry for {url}: {source}")]
    Read {
        url: String,
        source: std::io::Error,
    },

    #[error("Cached entry for {url} is not valid UTF-8")]
    Decode { url: String },

    #[error("Cached entry for {url} is empty")]
    EmptyEntry { url: String },

    #[error("Failed to write cached entry for {url}: {source}")]
    Write {
        url: String,
        source: std::io::Error,
    },
}

/// A page retrieved from the cache
#[derive(Debug, Clone)]
pub struct CachedPage {
    /// Cache filename the entry was stored under
    pub key: String,

    /// The page's rendered text
    pub text: String,

    /// Encoding the text was decoded with
    pub encoding: String,
}

/// Content-addressed on-disk page cache
///
/// One file per cached page, filename = [`cache_key`] of the source URL,
/// content = the page's rendered text. There is no index file; presence is
/// determined by listing the cache directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Creates a cache store rooted at the given directory
    ///
    /// The directory itself is only created on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Looks up the cached entry for a URL
    ///
    /// # Returns
    ///
    /// * `Ok(Some(page))` - A valid cached entry exists
    /// * `Ok(None)` - No entry for this URL (or no cache directory yet)
    /// * `Err(CacheError)` - The entry exists but is unreadable, not valid
    ///   UTF-8, or empty after trimming; recoverable, treat as a miss
    pub fn get(&self, url: &str) -> Result<Option<CachedPage>, CacheError> {
        if !self.dir.exists() {
            return Ok(None);
        }

        let key = cache_key(url);
        if !self.entry_present(&key) {
            return Ok(None);
        }

        let path = self.dir.join(&key);
        let bytes = fs::read(&path).map_err(|source| CacheError::Read {
            url: url.to_string(),
            source,
        })?;

        let text = String::from_utf8(bytes).map_err(|_| CacheError::Decode {
            url: url.to_string(),
        })?;

        if text.trim().is_empty() {
            return Err(CacheError::EmptyEntry {
                url: url.to_string(),
            });
        }

        Ok(Some(CachedPage {
            key,
            text,
            encoding: "utf-8".to_string(),
        }))
    }

    /// Persists the rendered text of a page
    ///
    /// Creates the cache directory if necessary and writes the text encoded
    /// with the supplied encoding label (unknown labels fall back to UTF-8).
    /// An existing entry under the same key is silently overwritten; key
    /// collisions between distinct URLs are accepted, not detected.
    pub fn put(&self, url: &str, text: &str, encoding: &str) -> Result<(), CacheError> {
        let write_err = |source| CacheError::Write {
            url: url.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let encoding = encoding_rs::Encoding::for_label(encoding.as_bytes())
            .unwrap_or(encoding_rs::UTF_8);
        let (bytes, _, _) = encoding.encode(text);

        let path = self.dir.join(cache_key(url));
        fs::write(&path, &bytes).map_err(write_err)
    }

    /// Checks entry presence by scanning the cache directory listing
    fn entry_present(&self, key: &str) -> bool {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return false;
        };
        entries
            .flatten()
            .any(|entry| entry.file_name().to_string_lossy() == key)
    }

    /// Returns the cache directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
