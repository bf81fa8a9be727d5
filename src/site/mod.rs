//! Site-specific page classification and extraction rules
//!
//! The markup heuristics that tell a recipe page from a listing page are
//! fragile and site-specific, so they live behind the [`SiteRules`] trait
//! rather than inside the crawl engine. A [`SiteRegistry`] selects the rule
//! set by domain, falling back to the reference rules for the one site
//! family originally targeted.

mod extract;
mod rules;

pub use extract::{extract_ingredients, extract_recipe, Recipe};
pub use rules::{ReferenceRules, SiteRegistry, SiteRules};
