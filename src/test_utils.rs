//! Shared test utilities for `RecipeBox`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        caller::Caller,
        ingredient,
        recipe,
        tag,
        user::{self, NewUser},
        validation::{IngredientAmount, RecipePayload},
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_COLOR: AtomicU32 = AtomicU32::new(1);

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Profile fields for `username`.
///
/// # Defaults
/// * `email`: "{username}@example.com"
/// * `first_name` / `last_name`: "Test" / "User"
/// * `is_admin`: false
pub fn new_user_fields(username: &str) -> NewUser {
    NewUser {
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        is_admin: false,
    }
}

/// Creates a regular user.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::user::Model> {
    user::create_user(db, new_user_fields(username)).await
}

/// Creates an administrator.
pub async fn create_test_admin(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::user::Model> {
    let mut fields = new_user_fields(username);
    fields.is_admin = true;
    user::create_user(db, fields).await
}

/// Creates a tag named after `slug` with a colour no other test tag uses.
pub async fn create_test_tag(db: &DatabaseConnection, slug: &str) -> Result<entities::tag::Model> {
    let color = format!("#{:06X}", NEXT_COLOR.fetch_add(1, Ordering::Relaxed));
    tag::create_tag(db, format!("Tag {slug}"), color, slug.to_string()).await
}

/// Creates an ingredient.
pub async fn create_test_ingredient(
    db: &DatabaseConnection,
    name: &str,
    measurement_unit: &str,
) -> Result<entities::ingredient::Model> {
    ingredient::create_ingredient(db, name.to_string(), measurement_unit.to_string()).await
}

/// A complete recipe payload.
///
/// # Defaults
/// * `name`: "Test Recipe"
/// * `cooking_time`: 15
/// * `image`: "recipes/test.png"
pub fn recipe_payload(tags: &[i64], ingredients: &[(i64, i32)]) -> RecipePayload {
    RecipePayload {
        name: Some("Test Recipe".to_string()),
        text: Some("Combine everything and cook.".to_string()),
        cooking_time: Some(15),
        image: Some("recipes/test.png".to_string()),
        tags: tags.to_vec(),
        ingredients: ingredients
            .iter()
            .map(|&(id, amount)| IngredientAmount { id, amount })
            .collect(),
    }
}

/// Creates a recipe by `author_id` from [`recipe_payload`] defaults.
pub async fn create_test_recipe(
    db: &DatabaseConnection,
    author_id: i64,
    tags: &[i64],
    ingredients: &[(i64, i32)],
) -> Result<entities::recipe::Model> {
    recipe::create_recipe(
        db,
        Caller::User(author_id),
        recipe_payload(tags, ingredients),
    )
    .await
}

/// Rows created by [`setup_with_recipe`].
pub struct RecipeFixture {
    /// Author of `recipe`, username "author"
    pub author: entities::user::Model,
    /// The "lunch" tag attached to `recipe`
    pub tag: entities::tag::Model,
    /// "salt" in g, 2 per recipe
    pub salt: entities::ingredient::Model,
    /// "wheat flour" in g, 300 per recipe
    pub flour: entities::ingredient::Model,
    /// The stored recipe
    pub recipe: entities::recipe::Model,
}

/// Creates a test database holding one complete recipe.
pub async fn setup_with_recipe() -> Result<(DatabaseConnection, RecipeFixture)> {
    let db = setup_test_db().await?;
    let author = create_test_user(&db, "author").await?;
    let tag = create_test_tag(&db, "lunch").await?;
    let salt = create_test_ingredient(&db, "salt", "g").await?;
    let flour = create_test_ingredient(&db, "wheat flour", "g").await?;
    let recipe =
        create_test_recipe(&db, author.id, &[tag.id], &[(salt.id, 2), (flour.id, 300)]).await?;

    Ok((
        db,
        RecipeFixture {
            author,
            tag,
            salt,
            flour,
            recipe,
        },
    ))
}
