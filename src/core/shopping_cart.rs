//! Shopping cart business logic - Marking recipes for the shopping list.
//!
//! Same lifecycle as favorites: one entry per (user, recipe), a second add fails.

use crate::{
    core::{recipe::require_recipe, user::require_user},
    entities::{ShoppingCart, recipe, shopping_cart},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, Set, prelude::*};

/// Whether `recipe_id` is in `user_id`'s shopping cart.
pub async fn is_in_cart(db: &DatabaseConnection, user_id: i64, recipe_id: i64) -> Result<bool> {
    let count = ShoppingCart::find()
        .filter(shopping_cart::Column::UserId.eq(user_id))
        .filter(shopping_cart::Column::RecipeId.eq(recipe_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Ids of every recipe in the user's cart.
pub async fn cart_recipe_ids(db: &DatabaseConnection, user_id: i64) -> Result<Vec<i64>> {
    Ok(ShoppingCart::find()
        .filter(shopping_cart::Column::UserId.eq(user_id))
        .all(db)
        .await?
        .into_iter()
        .map(|entry| entry.recipe_id)
        .collect())
}

fn already_in_cart(recipe_id: i64) -> String {
    format!("recipe {recipe_id} is already in the shopping cart")
}

/// Inserts the (user, recipe) row; a store-level duplicate maps to
/// [`Error::AlreadyExists`].
async fn insert_cart_entry(db: &DatabaseConnection, user_id: i64, recipe_id: i64) -> Result<()> {
    let entry = shopping_cart::ActiveModel {
        user_id: Set(user_id),
        recipe_id: Set(recipe_id),
        created_at: Set(chrono::Utc::now()),
    };
    ShoppingCart::insert(entry)
        .exec_without_returning(db)
        .await
        .map_err(|e| Error::from_insert(e, "shopping cart entry", already_in_cart(recipe_id)))?;
    Ok(())
}

/// Adds a recipe to the user's cart and returns the recipe.
///
/// # Errors
/// - [`Error::NotFound`] if the user or the recipe does not exist
/// - [`Error::AlreadyExists`] if the recipe is already in the cart
pub async fn add_to_cart(
    db: &DatabaseConnection,
    user_id: i64,
    recipe_id: i64,
) -> Result<recipe::Model> {
    require_user(db, user_id).await?;
    let recipe = require_recipe(db, recipe_id).await?;

    if is_in_cart(db, user_id, recipe_id).await? {
        return Err(Error::AlreadyExists {
            entity: "shopping cart entry",
            detail: already_in_cart(recipe_id),
        });
    }

    insert_cart_entry(db, user_id, recipe_id).await?;

    tracing::info!(user_id, recipe_id, "Added recipe to shopping cart");
    Ok(recipe)
}

/// Removes a recipe from the user's cart.
///
/// # Errors
/// - [`Error::NotFound`] if the recipe does not exist or is not in the cart
pub async fn remove_from_cart(db: &DatabaseConnection, user_id: i64, recipe_id: i64) -> Result<()> {
    require_recipe(db, recipe_id).await?;

    let result = ShoppingCart::delete_many()
        .filter(shopping_cart::Column::UserId.eq(user_id))
        .filter(shopping_cart::Column::RecipeId.eq(recipe_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "shopping cart entry",
            id: recipe_id.to_string(),
        });
    }

    tracing::info!(user_id, recipe_id, "Removed recipe from shopping cart");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_cart_add_remove_cycle() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;
        let shopper = create_test_user(&db, "shopper").await?;

        add_to_cart(&db, shopper.id, fixture.recipe.id).await?;
        assert!(is_in_cart(&db, shopper.id, fixture.recipe.id).await?);
        assert_eq!(cart_recipe_ids(&db, shopper.id).await?, vec![fixture.recipe.id]);

        let result = add_to_cart(&db, shopper.id, fixture.recipe.id).await;
        assert!(matches!(result.unwrap_err(), Error::AlreadyExists { .. }));

        remove_from_cart(&db, shopper.id, fixture.recipe.id).await?;
        assert!(!is_in_cart(&db, shopper.id, fixture.recipe.id).await?);
        assert!(cart_recipe_ids(&db, shopper.id).await?.is_empty());

        let result = remove_from_cart(&db, shopper.id, fixture.recipe.id).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;

        let result = add_to_cart(&db, 9999, fixture.recipe.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "user", .. }
        ));
        assert!(cart_recipe_ids(&db, 9999).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_store_level_duplicate_maps_to_already_exists() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;

        insert_cart_entry(&db, fixture.author.id, fixture.recipe.id).await?;
        let result = insert_cart_entry(&db, fixture.author.id, fixture.recipe.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AlreadyExists {
                entity: "shopping cart entry",
                ..
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_add_missing_recipe() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;
        let result = add_to_cart(&db, fixture.author.id, 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "recipe",
                ..
            }
        ));
        Ok(())
    }
}
