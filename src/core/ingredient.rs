//! Ingredient business logic - Reference data recipes quantify against.

use crate::{
    entities::{Ingredient, ingredient},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::LikeExpr};

/// Creates an ingredient.
///
/// # Errors
/// Returns an error if the name or the measurement unit is empty.
pub async fn create_ingredient(
    db: &DatabaseConnection,
    name: String,
    measurement_unit: String,
) -> Result<ingredient::Model> {
    let name = name.trim();
    let measurement_unit = measurement_unit.trim();
    if name.is_empty() {
        return Err(Error::MissingField { field: "name" });
    }
    if measurement_unit.is_empty() {
        return Err(Error::MissingField {
            field: "measurement_unit",
        });
    }

    let ingredient = ingredient::ActiveModel {
        name: Set(name.to_string()),
        measurement_unit: Set(measurement_unit.to_string()),
        ..Default::default()
    };
    ingredient.insert(db).await.map_err(Into::into)
}

/// Returns the ingredient with this name and unit, creating it if needed.
///
/// The boolean is true when a new row was inserted.
pub async fn get_or_create_ingredient(
    db: &DatabaseConnection,
    name: String,
    measurement_unit: String,
) -> Result<(ingredient::Model, bool)> {
    let existing = Ingredient::find()
        .filter(ingredient::Column::Name.eq(name.trim()))
        .filter(ingredient::Column::MeasurementUnit.eq(measurement_unit.trim()))
        .one(db)
        .await?;

    match existing {
        Some(ingredient) => Ok((ingredient, false)),
        None => Ok((create_ingredient(db, name, measurement_unit).await?, true)),
    }
}

/// Finds an ingredient by id.
pub async fn get_ingredient_by_id(
    db: &DatabaseConnection,
    ingredient_id: i64,
) -> Result<Option<ingredient::Model>> {
    Ingredient::find_by_id(ingredient_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Escapes `LIKE` wildcards so `prefix` is matched literally.
fn like_prefix(prefix: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape('\\')
}

/// Lists ingredients whose name starts with `prefix`, ignoring case, ordered by name.
///
/// An empty prefix lists every ingredient. `SQLite` `LIKE` only folds ASCII case, so
/// the store narrows the rows and the final match is re-checked with a Unicode fold.
pub async fn search_ingredients(
    db: &DatabaseConnection,
    prefix: &str,
) -> Result<Vec<ingredient::Model>> {
    let prefix = prefix.trim().to_lowercase();
    let mut query = Ingredient::find().order_by_asc(ingredient::Column::Name);
    if prefix.is_ascii() && !prefix.is_empty() {
        query = query.filter(ingredient::Column::Name.like(like_prefix(&prefix)));
    }
    let ingredients = query.all(db).await?;

    Ok(ingredients
        .into_iter()
        .filter(|ingredient| ingredient.name.to_lowercase().starts_with(&prefix))
        .collect())
}
