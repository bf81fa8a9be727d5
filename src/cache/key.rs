use sha2::{Digest, Sha256};

/// Number of hex characters kept from the hash.
///
/// Wide enough that accidental collisions between distinct URLs are not a
/// practical concern, while keeping cache filenames short.
const KEY_LEN: usize = 16;

/// Derives the cache filename for a URL
///
/// The key is the truncated hex SHA-256 of the URL string: deterministic,
/// fixed-length, and alphanumeric. The same URL always maps to the same key.
///
/// # Example
///
/// ```
/// use ladle::cache::cache_key;
///
/// let key = cache_key("https://example.com/recipes");
/// assert_eq!(key.len(), 16);
/// assert_eq!(key, cache_key("https://example.com/recipes"));
/// ```
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..KEY_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        let a = cache_key("https://example.com/page");
        let b = cache_key("https://example.com/page");
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_is_fixed_length() {
        assert_eq!(cache_key("").len(), KEY_LEN);
        assert_eq!(cache_key("https://example.com/").len(), KEY_LEN);
        assert_eq!(
            cache_key(&"https://example.com/".repeat(100)).len(),
            KEY_LEN
        );
    }

    #[test]
    fn test_key_is_alphanumeric() {
        let key = cache_key("https://example.com/recipes?page=2");
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_distinct_urls_get_distinct_keys() {
        assert_ne!(
            cache_key("https://example.com/a"),
            cache_key("https://example.com/b")
        );
    }
}
