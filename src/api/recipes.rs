//! Recipe handlers: reads, writes, favorites, shopping cart and the shopping list
//! download.

use super::{ApiResult, AppState};
use crate::core::{
    caller::Caller,
    favorite,
    projection::{self, RecipeView, ShortRecipe},
    recipe::{self, RecipeFilter},
    shopping_cart,
    shopping_list::{self, SHOPPING_LIST_FILENAME},
    validation::RecipePayload,
};
use serde::Serialize;

/// A recipe read request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeRead {
    /// Every recipe matching the filter, newest first
    List(RecipeFilter),
    /// One recipe by id
    Detail {
        /// Recipe to read
        recipe_id: i64,
    },
}

/// Answer to a [`RecipeRead`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecipeReadResponse {
    /// Projected recipes for a list read
    List(Vec<RecipeView>),
    /// The projected recipe for a detail read
    Detail(Box<RecipeView>),
}

/// Plain-text shopping list offered as a file download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingListFile {
    /// Suggested file name
    pub filename: &'static str,
    /// Rendered list
    pub content: String,
}

/// Lists or fetches recipes, projected for `caller`.
pub async fn read_recipes(
    state: &AppState,
    caller: Caller,
    read: RecipeRead,
) -> ApiResult<RecipeReadResponse> {
    let db = &state.database;
    match read {
        RecipeRead::List(filter) => {
            let recipes = recipe::list_recipes(db, caller, &filter).await?;
            let views = projection::project_recipes(db, caller, recipes).await?;
            Ok(RecipeReadResponse::List(views))
        }
        RecipeRead::Detail { recipe_id } => {
            let recipe = recipe::require_recipe(db, recipe_id).await?;
            let view = projection::project_recipe(db, caller, recipe).await?;
            Ok(RecipeReadResponse::Detail(Box::new(view)))
        }
    }
}

/// Creates a recipe authored by the caller.
pub async fn create_recipe(
    state: &AppState,
    caller: Caller,
    payload: RecipePayload,
) -> ApiResult<RecipeView> {
    let db = &state.database;
    let recipe = recipe::create_recipe(db, caller, payload).await?;
    Ok(projection::project_recipe(db, caller, recipe).await?)
}

/// Replaces an existing recipe.
pub async fn update_recipe(
    state: &AppState,
    caller: Caller,
    recipe_id: i64,
    payload: RecipePayload,
) -> ApiResult<RecipeView> {
    let db = &state.database;
    let recipe = recipe::update_recipe(db, caller, recipe_id, payload).await?;
    Ok(projection::project_recipe(db, caller, recipe).await?)
}

/// Deletes a recipe.
pub async fn delete_recipe(state: &AppState, caller: Caller, recipe_id: i64) -> ApiResult<()> {
    recipe::delete_recipe(&state.database, caller, recipe_id).await?;
    Ok(())
}

/// Adds a recipe to the caller's favorites.
pub async fn add_favorite(
    state: &AppState,
    caller: Caller,
    recipe_id: i64,
) -> ApiResult<ShortRecipe> {
    let user_id = caller.require("favorite a recipe")?;
    let recipe = favorite::add_favorite(&state.database, user_id, recipe_id).await?;
    Ok(recipe.into())
}

/// Removes a recipe from the caller's favorites.
pub async fn remove_favorite(state: &AppState, caller: Caller, recipe_id: i64) -> ApiResult<()> {
    let user_id = caller.require("unfavorite a recipe")?;
    favorite::remove_favorite(&state.database, user_id, recipe_id).await?;
    Ok(())
}

/// Adds a recipe to the caller's shopping cart.
pub async fn add_to_shopping_cart(
    state: &AppState,
    caller: Caller,
    recipe_id: i64,
) -> ApiResult<ShortRecipe> {
    let user_id = caller.require("use the shopping cart")?;
    let recipe = shopping_cart::add_to_cart(&state.database, user_id, recipe_id).await?;
    Ok(recipe.into())
}

/// Removes a recipe from the caller's shopping cart.
pub async fn remove_from_shopping_cart(
    state: &AppState,
    caller: Caller,
    recipe_id: i64,
) -> ApiResult<()> {
    let user_id = caller.require("use the shopping cart")?;
    shopping_cart::remove_from_cart(&state.database, user_id, recipe_id).await?;
    Ok(())
}

/// Renders the caller's aggregated shopping list.
pub async fn download_shopping_list(
    state: &AppState,
    caller: Caller,
) -> ApiResult<ShoppingListFile> {
    let user_id = caller.require("download a shopping list")?;
    let lines = shopping_list::aggregate_shopping_list(&state.database, user_id).await?;

    tracing::info!(user_id, lines = lines.len(), "Shopping list downloaded");
    Ok(ShoppingListFile {
        filename: SHOPPING_LIST_FILENAME,
        content: shopping_list::render_shopping_list(&lines),
    })
}
