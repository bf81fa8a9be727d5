use crate::output::document::{read_document, write_document, RecipeRecord};
use crate::output::OutputError;
use crate::site::Recipe;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-domain append-only recipe persistence
///
/// One XML document per normalized domain lives under the output directory,
/// named `<domain>.xml`. Appends are additive: prior records are never
/// replaced, and every write leaves the document parseable.
#[derive(Debug, Clone)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    /// Creates an output store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Appends a recipe to the domain's document
    ///
    /// Creates the output directory and an empty well-formed document if
    /// either is missing. A record is appended only when the recipe has at
    /// least one ingredient; a recipe page without qualifying ingredients
    /// still creates the (empty) domain document but adds no record.
    pub fn append_recipe(&self, domain: &str, recipe: &Recipe) -> Result<(), OutputError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.document_path(domain);

        // Create the domain document if it's missing
        if !path.exists() {
            write_document(&path, &[])?;
        }

        if recipe.ingredients.is_empty() {
            return Ok(());
        }

        let mut records = read_document(&path)?;
        records.push(RecipeRecord {
            source: recipe.source_url.clone(),
            ingredients: recipe.ingredients.clone(),
        });
        write_document(&path, &records)
    }

    /// Returns the document path for a normalized domain
    pub fn document_path(&self, domain: &str) -> PathBuf {
        self.dir.join(format!("{domain}.xml"))
    }

    /// Returns the output directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
