//! Recipe payload validation.
//!
//! A submitted recipe is checked before anything touches the store: required scalar
//! fields, non-empty tag and ingredient lists, and ingredient uniqueness within the
//! submission. Checks are pure; resolving ids against the store happens in
//! [`crate::core::recipe::write_recipe`].

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;

/// One ingredient line of a submitted recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IngredientAmount {
    /// Ingredient id
    pub id: i64,
    /// Quantity in the ingredient's measurement unit
    pub amount: i32,
}

/// A recipe as submitted by the boundary layer, before validation.
///
/// Scalar fields are optional here because the boundary may omit them; tags and
/// ingredients default to empty lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePayload {
    /// Dish name
    pub name: Option<String>,
    /// Cooking instructions
    pub text: Option<String>,
    /// Cooking time in minutes
    pub cooking_time: Option<i32>,
    /// Reference to an already stored image
    pub image: Option<String>,
    /// Tag ids
    #[serde(default)]
    pub tags: Vec<i64>,
    /// Ingredient ids with amounts
    #[serde(default)]
    pub ingredients: Vec<IngredientAmount>,
}

/// A payload that passed [`validate`]. Only `validate` produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    name: String,
    text: String,
    cooking_time: i32,
    image: Option<String>,
    tags: Vec<i64>,
    ingredients: Vec<IngredientAmount>,
}

impl RecipeDraft {
    /// Dish name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cooking instructions
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cooking time in minutes, at least 1
    #[must_use]
    pub const fn cooking_time(&self) -> i32 {
        self.cooking_time
    }

    /// Image reference, if one was submitted
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Tag ids, in submission order
    #[must_use]
    pub fn tags(&self) -> &[i64] {
        &self.tags
    }

    /// Ingredient lines, in submission order, ids unique
    #[must_use]
    pub fn ingredients(&self) -> &[IngredientAmount] {
        &self.ingredients
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField { field }),
    }
}

/// Validates a recipe payload for create or replace.
///
/// # Errors
/// - [`Error::MissingField`] if `name`, `text` or `cooking_time` is absent or empty
///   (a cooking time of 0 counts as empty)
/// - [`Error::InvalidValue`] if `cooking_time` is negative or an ingredient amount is below 1
/// - [`Error::EmptySet`] if `tags` or `ingredients` is empty
/// - [`Error::DuplicateIngredient`] if one ingredient id is listed twice
pub fn validate(payload: RecipePayload) -> Result<RecipeDraft> {
    let name = required_text(payload.name, "name")?;
    let text = required_text(payload.text, "text")?;

    let cooking_time = match payload.cooking_time {
        None | Some(0) => return Err(Error::MissingField { field: "cooking_time" }),
        Some(minutes) if minutes < 1 => {
            return Err(Error::InvalidValue {
                field: "cooking_time",
                message: "must be at least 1 minute".to_string(),
            });
        }
        Some(minutes) => minutes,
    };

    if payload.tags.is_empty() {
        return Err(Error::EmptySet { field: "tags" });
    }
    if payload.ingredients.is_empty() {
        return Err(Error::EmptySet {
            field: "ingredients",
        });
    }

    let mut seen = HashSet::with_capacity(payload.ingredients.len());
    for line in &payload.ingredients {
        if !seen.insert(line.id) {
            return Err(Error::DuplicateIngredient { id: line.id });
        }
        if line.amount < 1 {
            return Err(Error::InvalidValue {
                field: "ingredients",
                message: format!("amount for ingredient {} must be at least 1", line.id),
            });
        }
    }

    Ok(RecipeDraft {
        name,
        text,
        cooking_time,
        image: payload.image.filter(|image| !image.trim().is_empty()),
        tags: payload.tags,
        ingredients: payload.ingredients,
    })
}
