use url::Url;

/// Collapses a URL authority to a heuristic second-level domain
///
/// Strips any `:port` suffix, then repeatedly drops leading labels until at
/// most two remain. This is an eTLD+1 approximation: it misclassifies
/// multi-part public suffixes such as `example.co.uk` (collapsed to
/// `co.uk`), which is accepted for the site families this crawler targets.
///
/// # Examples
///
/// ```
/// use ladle::url::collapse_domain;
///
/// assert_eq!(collapse_domain("www.example.com:8080"), "example.com");
/// assert_eq!(collapse_domain("a.b.example.com"), "example.com");
/// ```
pub fn collapse_domain(authority: &str) -> String {
    let mut domain = authority.to_lowercase();

    // Remove port (e.g. ":80")
    if let Some(idx) = domain.find(':') {
        domain.truncate(idx);
    }

    // Remove all but the last two labels (e.g. "www." in "www.example.com")
    while domain.matches('.').count() > 1 {
        if let Some(idx) = domain.find('.') {
            domain = domain[idx + 1..].to_string();
        }
    }

    domain
}

/// Extracts the collapsed domain from a URL
///
/// Returns the lowercase host run through [`collapse_domain`], or `None`
/// if the URL has no host (which shouldn't happen for valid HTTP(S) URLs).
pub fn domain_of(url: &Url) -> Option<String> {
    url.host_str().map(collapse_domain)
}
