//! Recipe business logic - Writing, reading, filtering and deleting recipes.
//!
//! A recipe write replaces the scalar fields, the tag links and the ingredient amounts
//! of one recipe inside a single database transaction. If any referenced tag or
//! ingredient is missing, nothing is written and the previous state stays intact.

use crate::{
    core::{
        caller::Caller,
        user,
        validation::{self, IngredientAmount, RecipeDraft, RecipePayload},
    },
    entities::{
        Favorite, Ingredient, Recipe, RecipeIngredient, RecipeTag, ShoppingCart, Tag, favorite,
        ingredient, recipe, recipe_ingredient, recipe_tag, shopping_cart, tag,
    },
    errors::{Error, Result},
};
use sea_orm::{
    JoinType, PaginatorTrait, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*,
};
use std::collections::{BTreeSet, HashSet};

/// Which recipe a write applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeTarget {
    /// Insert a new recipe owned by `author_id`
    New {
        /// Author of the new recipe
        author_id: i64,
    },
    /// Replace the contents of an existing recipe
    Existing {
        /// Recipe to replace
        recipe_id: i64,
    },
}

/// Filters for [`list_recipes`]. The default lists every recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Only recipes by this author
    pub author_id: Option<i64>,
    /// Only recipes carrying at least one of these tag slugs
    pub tags: Vec<String>,
    /// Only recipes the caller has favorited
    pub is_favorited: bool,
    /// Only recipes in the caller's shopping cart
    pub is_in_shopping_cart: bool,
}

/// Checks that every tag and ingredient the draft references exists.
async fn ensure_references<C>(conn: &C, draft: &RecipeDraft) -> Result<()>
where
    C: ConnectionTrait,
{
    let ingredient_ids: Vec<i64> = draft.ingredients().iter().map(|line| line.id).collect();
    let known: HashSet<i64> = Ingredient::find()
        .filter(ingredient::Column::Id.is_in(ingredient_ids.clone()))
        .all(conn)
        .await?
        .into_iter()
        .map(|ingredient| ingredient.id)
        .collect();
    if let Some(id) = ingredient_ids.into_iter().find(|id| !known.contains(id)) {
        return Err(Error::UnknownIngredient { id });
    }

    let known: HashSet<i64> = Tag::find()
        .filter(tag::Column::Id.is_in(draft.tags().to_vec()))
        .all(conn)
        .await?
        .into_iter()
        .map(|tag| tag.id)
        .collect();
    if let Some(&id) = draft.tags().iter().find(|id| !known.contains(id)) {
        return Err(Error::UnknownTag { id });
    }

    Ok(())
}

/// Replaces the recipe's tag links with exactly `tag_ids`.
async fn replace_tags<C>(conn: &C, recipe_id: i64, tag_ids: &[i64]) -> Result<()>
where
    C: ConnectionTrait,
{
    RecipeTag::delete_many()
        .filter(recipe_tag::Column::RecipeId.eq(recipe_id))
        .exec(conn)
        .await?;

    let rows: Vec<recipe_tag::ActiveModel> = tag_ids
        .iter()
        .copied()
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .map(|tag_id| recipe_tag::ActiveModel {
            recipe_id: Set(recipe_id),
            tag_id: Set(tag_id),
        })
        .collect();
    if !rows.is_empty() {
        RecipeTag::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

/// Replaces all of the recipe's ingredient rows with exactly `lines`.
async fn replace_ingredients<C>(conn: &C, recipe_id: i64, lines: &[IngredientAmount]) -> Result<()>
where
    C: ConnectionTrait,
{
    RecipeIngredient::delete_many()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .exec(conn)
        .await?;

    let rows: Vec<recipe_ingredient::ActiveModel> = lines
        .iter()
        .map(|line| recipe_ingredient::ActiveModel {
            recipe_id: Set(recipe_id),
            ingredient_id: Set(line.id),
            amount: Set(line.amount),
        })
        .collect();
    if !rows.is_empty() {
        RecipeIngredient::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

/// Inserts or replaces a recipe together with its tags and ingredient amounts.
///
/// For [`RecipeTarget::New`] the recipe row is inserted first; for
/// [`RecipeTarget::Existing`] its name, text, cooking time and, when the draft carries
/// one, image are updated. Tag links and ingredient rows are then replaced with exactly
/// the drafted sets. Everything runs in one transaction.
///
/// # Errors
/// - [`Error::UnknownIngredient`] / [`Error::UnknownTag`] if a referenced id does not exist
/// - [`Error::NotFound`] if the existing recipe is gone
/// - [`Error::Database`] on store failures
///
/// In every error case the transaction is rolled back.
pub async fn write_recipe(
    db: &DatabaseConnection,
    target: RecipeTarget,
    draft: &RecipeDraft,
) -> Result<recipe::Model> {
    let txn = db.begin().await?;

    ensure_references(&txn, draft).await?;

    let recipe = match target {
        RecipeTarget::New { author_id } => {
            recipe::ActiveModel {
                author_id: Set(author_id),
                name: Set(draft.name().to_string()),
                image: Set(draft.image().map(str::to_string)),
                text: Set(draft.text().to_string()),
                cooking_time: Set(draft.cooking_time()),
                created_at: Set(chrono::Utc::now()),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
        RecipeTarget::Existing { recipe_id } => {
            let mut recipe: recipe::ActiveModel = Recipe::find_by_id(recipe_id)
                .one(&txn)
                .await?
                .ok_or_else(|| Error::NotFound {
                    entity: "recipe",
                    id: recipe_id.to_string(),
                })?
                .into();

            recipe.name = Set(draft.name().to_string());
            recipe.text = Set(draft.text().to_string());
            recipe.cooking_time = Set(draft.cooking_time());
            if let Some(image) = draft.image() {
                recipe.image = Set(Some(image.to_string()));
            }
            recipe.update(&txn).await?
        }
    };

    replace_tags(&txn, recipe.id, draft.tags()).await?;
    replace_ingredients(&txn, recipe.id, draft.ingredients()).await?;

    txn.commit().await?;

    tracing::debug!(
        recipe_id = recipe.id,
        tags = draft.tags().len(),
        ingredients = draft.ingredients().len(),
        "Wrote recipe"
    );
    Ok(recipe)
}

/// Finds a recipe by id.
pub async fn get_recipe_by_id(
    db: &DatabaseConnection,
    recipe_id: i64,
) -> Result<Option<recipe::Model>> {
    Recipe::find_by_id(recipe_id).one(db).await.map_err(Into::into)
}

/// Finds a recipe by id, failing with [`Error::NotFound`] if absent.
pub async fn require_recipe(db: &DatabaseConnection, recipe_id: i64) -> Result<recipe::Model> {
    get_recipe_by_id(db, recipe_id)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "recipe",
            id: recipe_id.to_string(),
        })
}

/// Checks that `user_id` may change `recipe`: its author or an administrator.
async fn ensure_can_modify(
    db: &DatabaseConnection,
    user_id: i64,
    recipe: &recipe::Model,
    action: &'static str,
) -> Result<()> {
    if recipe.author_id == user_id {
        return Ok(());
    }
    let user = user::require_user(db, user_id).await?;
    if user.is_admin {
        return Ok(());
    }
    Err(Error::Forbidden { action })
}

/// Validates a payload and creates a recipe authored by the caller.
///
/// # Errors
/// [`Error::Unauthenticated`] for anonymous callers, any validation error from
/// [`validation::validate`], or any error from [`write_recipe`].
pub async fn create_recipe(
    db: &DatabaseConnection,
    caller: Caller,
    payload: RecipePayload,
) -> Result<recipe::Model> {
    let author_id = caller.require("create a recipe")?;
    let draft = validation::validate(payload)?;
    user::require_user(db, author_id).await?;

    let recipe = write_recipe(db, RecipeTarget::New { author_id }, &draft).await?;
    tracing::info!(recipe_id = recipe.id, author_id, "Created recipe '{}'", recipe.name);
    Ok(recipe)
}

/// Validates a payload and replaces an existing recipe.
///
/// Only the author or an administrator may update a recipe. Omitting the image keeps
/// the stored one.
pub async fn update_recipe(
    db: &DatabaseConnection,
    caller: Caller,
    recipe_id: i64,
    payload: RecipePayload,
) -> Result<recipe::Model> {
    let user_id = caller.require("update a recipe")?;
    let existing = require_recipe(db, recipe_id).await?;
    ensure_can_modify(db, user_id, &existing, "update this recipe").await?;
    let draft = validation::validate(payload)?;

    let recipe = write_recipe(db, RecipeTarget::Existing { recipe_id }, &draft).await?;
    tracing::info!(recipe_id, user_id, "Updated recipe '{}'", recipe.name);
    Ok(recipe)
}

/// Deletes a recipe with its tag links, ingredient rows, favorites and cart entries.
///
/// Only the author or an administrator may delete a recipe.
pub async fn delete_recipe(db: &DatabaseConnection, caller: Caller, recipe_id: i64) -> Result<()> {
    let user_id = caller.require("delete a recipe")?;
    let recipe = require_recipe(db, recipe_id).await?;
    ensure_can_modify(db, user_id, &recipe, "delete this recipe").await?;

    let txn = db.begin().await?;

    RecipeTag::delete_many()
        .filter(recipe_tag::Column::RecipeId.eq(recipe_id))
        .exec(&txn)
        .await?;
    RecipeIngredient::delete_many()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .exec(&txn)
        .await?;
    Favorite::delete_many()
        .filter(favorite::Column::RecipeId.eq(recipe_id))
        .exec(&txn)
        .await?;
    ShoppingCart::delete_many()
        .filter(shopping_cart::Column::RecipeId.eq(recipe_id))
        .exec(&txn)
        .await?;
    Recipe::delete_by_id(recipe_id).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(recipe_id, user_id, "Deleted recipe '{}'", recipe.name);
    Ok(())
}

/// Lists recipes matching `filter`, newest first.
///
/// The favorited and shopping-cart filters are relative to `caller`; for anonymous
/// callers they match nothing.
pub async fn list_recipes(
    db: &DatabaseConnection,
    caller: Caller,
    filter: &RecipeFilter,
) -> Result<Vec<recipe::Model>> {
    let mut query = Recipe::find();

    if let Some(author_id) = filter.author_id {
        query = query.filter(recipe::Column::AuthorId.eq(author_id));
    }

    if !filter.tags.is_empty() {
        let tagged: Vec<i64> = RecipeTag::find()
            .join(JoinType::InnerJoin, recipe_tag::Relation::Tag.def())
            .filter(tag::Column::Slug.is_in(filter.tags.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|link| link.recipe_id)
            .collect();
        query = query.filter(recipe::Column::Id.is_in(tagged));
    }

    if filter.is_favorited || filter.is_in_shopping_cart {
        let Some(user_id) = caller.user_id() else {
            return Ok(Vec::new());
        };

        if filter.is_favorited {
            let ids: Vec<i64> = Favorite::find()
                .filter(favorite::Column::UserId.eq(user_id))
                .all(db)
                .await?
                .into_iter()
                .map(|row| row.recipe_id)
                .collect();
            query = query.filter(recipe::Column::Id.is_in(ids));
        }

        if filter.is_in_shopping_cart {
            let ids: Vec<i64> = ShoppingCart::find()
                .filter(shopping_cart::Column::UserId.eq(user_id))
                .all(db)
                .await?
                .into_iter()
                .map(|row| row.recipe_id)
                .collect();
            query = query.filter(recipe::Column::Id.is_in(ids));
        }
    }

    query
        .order_by_desc(recipe::Column::CreatedAt)
        .order_by_desc(recipe::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Tags attached to a recipe, ordered by name.
pub async fn get_recipe_tags(db: &DatabaseConnection, recipe_id: i64) -> Result<Vec<tag::Model>> {
    Tag::find()
        .join(JoinType::InnerJoin, tag::Relation::RecipeTags.def())
        .filter(recipe_tag::Column::RecipeId.eq(recipe_id))
        .order_by_asc(tag::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Ingredient rows of a recipe paired with the ingredient they quantify.
pub async fn get_recipe_ingredients(
    db: &DatabaseConnection,
    recipe_id: i64,
) -> Result<Vec<(recipe_ingredient::Model, ingredient::Model)>> {
    let rows = RecipeIngredient::find()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .find_also_related(Ingredient)
        .order_by_asc(ingredient::Column::Name)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(row, ingredient)| ingredient.map(|ingredient| (row, ingredient)))
        .collect())
}

/// Number of recipes written by `author_id`.
pub async fn count_recipes_by_author(db: &DatabaseConnection, author_id: i64) -> Result<u64> {
    Recipe::find()
        .filter(recipe::Column::AuthorId.eq(author_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Recipes written by `author_id`, newest first, at most `limit` of them.
pub async fn list_recipes_by_author(
    db: &DatabaseConnection,
    author_id: i64,
    limit: Option<u64>,
) -> Result<Vec<recipe::Model>> {
    let mut query = Recipe::find()
        .filter(recipe::Column::AuthorId.eq(author_id))
        .order_by_desc(recipe::Column::CreatedAt)
        .order_by_desc(recipe::Column::Id);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query.all(db).await.map_err(Into::into)
}
