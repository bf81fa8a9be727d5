//! Output module for persisting extracted recipes
//!
//! Recipes are accumulated in one XML document per normalized source domain.
//! Each append is a full load-modify-save cycle committed through a temp
//! file and rename, so the document stays well-formed even if the process
//! is interrupted between writes.

mod document;
mod store;

pub use document::{read_document, write_document, RecipeRecord};
pub use store::OutputStore;

use thiserror::Error;

/// Errors that can occur while persisting recipes
///
/// Unlike fetch errors these are fatal to the whole run: losing extracted
/// data silently is worse than stopping.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed domain document {path}: {message}")]
    Malformed { path: String, message: String },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
