use scraper::{Html, Selector};
use url::Url;

/// Per-site classification and link-qualification rules
///
/// Implementations decide whether a parsed page is a recipe page and, for
/// listing pages, which outgoing links plausibly lead to recipes. The crawl
/// engine never follows arbitrary links; everything a rule set does not
/// return is discarded.
pub trait SiteRules {
    /// Returns true if the document contains this site's recipe body marker
    fn is_recipe_page(&self, document: &Html) -> bool;

    /// Returns the qualifying recipe links, resolved against the page URL
    fn recipe_links(&self, document: &Html, base: &Url) -> Vec<String>;
}

/// Reference rules for the site family this crawler was built against
///
/// A page is a recipe page if it contains a `div.leftSideRecipe` container.
/// A link qualifies only if it sits directly inside an `<h3>` heading
/// carrying the `recipeTitleList` marker class.
#[derive(Debug, Default)]
pub struct ReferenceRules;

impl SiteRules for ReferenceRules {
    fn is_recipe_page(&self, document: &Html) -> bool {
        if let Ok(selector) = Selector::parse("div.leftSideRecipe") {
            document.select(&selector).next().is_some()
        } else {
            false
        }
    }

    fn recipe_links(&self, document: &Html, base: &Url) -> Vec<String> {
        let mut links = Vec::new();

        if let Ok(selector) = Selector::parse("h3.recipeTitleList > a[href]") {
            for element in document.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    if let Some(absolute) = resolve_link(href, base) {
                        links.push(absolute);
                    }
                }
            }
        }

        links
    }
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only links
/// - Invalid URLs or non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute.to_string())
        }
        _ => None,
    }
}

/// Selects a rule set by normalized domain
///
/// Domains without a registered rule set use the reference rules. New site
/// families are supported by registering an implementation for their domain.
pub struct SiteRegistry {
    sites: Vec<(String, Box<dyn SiteRules>)>,
    fallback: Box<dyn SiteRules>,
}

impl SiteRegistry {
    /// Creates a registry with only the reference rules
    pub fn new() -> Self {
        Self {
            sites: Vec::new(),
            fallback: Box::new(ReferenceRules),
        }
    }

    /// Registers a rule set for a normalized domain
    pub fn register(&mut self, domain: impl Into<String>, rules: Box<dyn SiteRules>) {
        self.sites.push((domain.into(), rules));
    }

    /// Returns the rule set for a normalized domain
    pub fn for_domain(&self, domain: &str) -> &dyn SiteRules {
        self.sites
            .iter()
            .find(|(d, _)| d == domain)
            .map(|(_, rules)| rules.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
