use scraper::{Html, Selector};

/// A recipe extracted from a single page
///
/// Immutable once built; ownership moves to the output store for
/// persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// URL the recipe was extracted from
    pub source_url: String,

    /// Ingredient strings in document order
    pub ingredients: Vec<String>,
}

/// Extracts the ingredient list from a recipe page
///
/// Selects every element carrying the `itemprop="ingredients"` semantic
/// marker, takes its direct text content (child text nodes only, not nested
/// elements), trims surrounding whitespace, and preserves document order.
/// Elements with no direct text are skipped. A page without ingredient
/// markers yields an empty list; that is normal control flow, not an error.
pub fn extract_ingredients(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("span[itemprop='ingredients']") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| {
            let text: String = element
                .children()
                .filter_map(|node| node.value().as_text())
                .map(|t| t.text.to_string())
                .collect();
            let text = text.trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .collect()
}

/// Builds a [`Recipe`] from a recipe page
pub fn extract_recipe(source_url: &str, document: &Html) -> Recipe {
    Recipe {
        source_url: source_url.to_string(),
        ingredients: extract_ingredients(document),
    }
}
