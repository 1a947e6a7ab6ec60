//! Favorite business logic - Bookmarking recipes.
//!
//! A user can favorite a recipe once; favoriting it again fails until the bookmark is
//! removed.

use crate::{
    core::{recipe::require_recipe, user::require_user},
    entities::{Favorite, favorite, recipe},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, Set, prelude::*};

/// Whether `user_id` has favorited `recipe_id`.
pub async fn is_favorited(db: &DatabaseConnection, user_id: i64, recipe_id: i64) -> Result<bool> {
    let count = Favorite::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(favorite::Column::RecipeId.eq(recipe_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Inserts the (user, recipe) row; a store-level duplicate maps to
/// [`Error::AlreadyExists`].
async fn insert_favorite(db: &DatabaseConnection, user_id: i64, recipe_id: i64) -> Result<()> {
    let row = favorite::ActiveModel {
        user_id: Set(user_id),
        recipe_id: Set(recipe_id),
        created_at: Set(chrono::Utc::now()),
    };
    Favorite::insert(row)
        .exec_without_returning(db)
        .await
        .map_err(|e| {
            Error::from_insert(
                e,
                "favorite",
                format!("recipe {recipe_id} is already in favorites"),
            )
        })?;
    Ok(())
}

/// Bookmarks a recipe for a user and returns the recipe.
///
/// # Errors
/// - [`Error::NotFound`] if the user or the recipe does not exist
/// - [`Error::AlreadyExists`] if the recipe is already a favorite of this user
pub async fn add_favorite(
    db: &DatabaseConnection,
    user_id: i64,
    recipe_id: i64,
) -> Result<recipe::Model> {
    require_user(db, user_id).await?;
    let recipe = require_recipe(db, recipe_id).await?;

    if is_favorited(db, user_id, recipe_id).await? {
        return Err(Error::AlreadyExists {
            entity: "favorite",
            detail: format!("recipe {recipe_id} is already in favorites"),
        });
    }

    insert_favorite(db, user_id, recipe_id).await?;

    tracing::info!(user_id, recipe_id, "Added recipe to favorites");
    Ok(recipe)
}

/// Removes a bookmark.
///
/// # Errors
/// - [`Error::NotFound`] if the recipe does not exist or is not a favorite of this user
pub async fn remove_favorite(db: &DatabaseConnection, user_id: i64, recipe_id: i64) -> Result<()> {
    require_recipe(db, recipe_id).await?;

    let result = Favorite::delete_many()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(favorite::Column::RecipeId.eq(recipe_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "favorite",
            id: recipe_id.to_string(),
        });
    }

    tracing::info!(user_id, recipe_id, "Removed recipe from favorites");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_favorite_twice_then_again_after_removal() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;
        let reader = create_test_user(&db, "reader").await?;

        let recipe = add_favorite(&db, reader.id, fixture.recipe.id).await?;
        assert_eq!(recipe.id, fixture.recipe.id);
        assert!(is_favorited(&db, reader.id, fixture.recipe.id).await?);

        let result = add_favorite(&db, reader.id, fixture.recipe.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AlreadyExists {
                entity: "favorite",
                ..
            }
        ));

        remove_favorite(&db, reader.id, fixture.recipe.id).await?;
        assert!(!is_favorited(&db, reader.id, fixture.recipe.id).await?);

        add_favorite(&db, reader.id, fixture.recipe.id).await?;
        assert!(is_favorited(&db, reader.id, fixture.recipe.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;

        let result = add_favorite(&db, 9999, fixture.recipe.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "user", .. }
        ));
        assert!(!is_favorited(&db, 9999, fixture.recipe.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_store_level_duplicate_maps_to_already_exists() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;
        let reader = create_test_user(&db, "reader").await?;

        // Second insert skips the existence check, so only the primary key catches it
        insert_favorite(&db, reader.id, fixture.recipe.id).await?;
        let result = insert_favorite(&db, reader.id, fixture.recipe.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AlreadyExists {
                entity: "favorite",
                ..
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_favorites_are_per_user() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;
        let reader = create_test_user(&db, "reader").await?;

        add_favorite(&db, reader.id, fixture.recipe.id).await?;
        add_favorite(&db, fixture.author.id, fixture.recipe.id).await?;
        assert!(is_favorited(&db, fixture.author.id, fixture.recipe.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_recipe_and_missing_favorite() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;

        let result = add_favorite(&db, fixture.author.id, 31337).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "recipe",
                ..
            }
        ));

        let result = remove_favorite(&db, fixture.author.id, fixture.recipe.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "favorite",
                ..
            }
        ));

        Ok(())
    }
}
