//! Read-only tag and ingredient handlers. These need no authentication.

use super::{ApiResult, AppState};
use crate::{
    core::{ingredient, tag},
    entities::{ingredient as ingredient_entity, tag as tag_entity},
    errors::Error,
};

/// Lists all tags ordered by name.
pub async fn list_tags(state: &AppState) -> ApiResult<Vec<tag_entity::Model>> {
    Ok(tag::list_tags(&state.database).await?)
}

/// Fetches one tag.
pub async fn get_tag(state: &AppState, tag_id: i64) -> ApiResult<tag_entity::Model> {
    tag::get_tag_by_id(&state.database, tag_id)
        .await?
        .ok_or_else(|| {
            Error::NotFound {
                entity: "tag",
                id: tag_id.to_string(),
            }
            .into()
        })
}

/// Lists ingredients whose name starts with `name`, ignoring case.
pub async fn search_ingredients(
    state: &AppState,
    name: &str,
) -> ApiResult<Vec<ingredient_entity::Model>> {
    Ok(ingredient::search_ingredients(&state.database, name).await?)
}

/// Fetches one ingredient.
pub async fn get_ingredient(
    state: &AppState,
    ingredient_id: i64,
) -> ApiResult<ingredient_entity::Model> {
    ingredient::get_ingredient_by_id(&state.database, ingredient_id)
        .await?
        .ok_or_else(|| {
            Error::NotFound {
                entity: "ingredient",
                id: ingredient_id.to_string(),
            }
            .into()
        })
}
