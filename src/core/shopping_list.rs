//! Shopping list aggregation.
//!
//! Sums ingredient amounts across every recipe in a user's shopping cart, one line per
//! ingredient, and renders the result as a plain-text report.

use crate::{
    core::shopping_cart::cart_recipe_ids,
    entities::{Ingredient, RecipeIngredient, recipe_ingredient},
    errors::Result,
};
use sea_orm::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// First line of every rendered shopping list.
pub const SHOPPING_LIST_HEADER: &str = "Shopping list:";

/// File name the rendered list is offered under.
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

/// Total amount of one ingredient across the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingListLine {
    /// Ingredient name
    pub name: String,
    /// Sum of amounts over all cart recipes
    pub total_amount: i64,
    /// Unit of `total_amount`
    pub measurement_unit: String,
}

impl fmt::Display for ShoppingListLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}",
            self.name, self.total_amount, self.measurement_unit
        )
    }
}

/// Collects and sums the ingredients of every recipe in the user's cart.
///
/// Lines are grouped by ingredient id and ordered by name, then unit. An empty cart
/// yields no lines.
pub async fn aggregate_shopping_list(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<ShoppingListLine>> {
    let recipe_ids = cart_recipe_ids(db, user_id).await?;
    if recipe_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = RecipeIngredient::find()
        .filter(recipe_ingredient::Column::RecipeId.is_in(recipe_ids))
        .find_also_related(Ingredient)
        .all(db)
        .await?;

    let mut totals: HashMap<i64, ShoppingListLine> = HashMap::new();
    for (row, ingredient) in rows {
        let Some(ingredient) = ingredient else {
            continue;
        };
        totals
            .entry(ingredient.id)
            .or_insert_with(|| ShoppingListLine {
                name: ingredient.name,
                total_amount: 0,
                measurement_unit: ingredient.measurement_unit,
            })
            .total_amount += i64::from(row.amount);
    }

    let mut lines: Vec<ShoppingListLine> = totals.into_values().collect();
    lines.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.measurement_unit.cmp(&b.measurement_unit))
    });

    tracing::debug!(user_id, lines = lines.len(), "Aggregated shopping list");
    Ok(lines)
}

/// Renders the header followed by one `name - total unit` line per ingredient.
#[must_use]
pub fn render_shopping_list(lines: &[ShoppingListLine]) -> String {
    let mut report = String::from(SHOPPING_LIST_HEADER);
    for line in lines {
        report.push('\n');
        report.push_str(&line.to_string());
    }
    report
}
