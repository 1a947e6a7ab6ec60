//! Reference data loading from config.toml
//!
//! Tags and ingredients are shared reference data. The catalog file lists the rows
//! that should exist; `core::catalog` seeds whichever of them are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire catalog file
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    /// Tags to seed
    #[serde(default)]
    pub tags: Vec<TagConfig>,
    /// Ingredients to seed
    #[serde(default)]
    pub ingredients: Vec<IngredientConfig>,
}

/// Configuration for a single tag
#[derive(Debug, Deserialize, Clone)]
pub struct TagConfig {
    /// Display name
    pub name: String,
    /// `#RRGGBB` colour code
    pub color: String,
    /// URL-safe identifier
    pub slug: String,
}

/// Configuration for a single ingredient
#[derive(Debug, Deserialize, Clone)]
pub struct IngredientConfig {
    /// Ingredient name
    pub name: String,
    /// Unit its amounts are expressed in
    pub measurement_unit: String,
}

/// Loads the catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path.as_ref().display()),
    })?;

    parse_catalog(&contents)
}

/// Parses catalog TOML text.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog: {e}"),
    })
}
