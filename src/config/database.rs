//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema, including composite keys, unique columns and foreign keys, always matches
//! the Rust structs. Creation uses `IF NOT EXISTS` and is safe to run on every start.

use crate::entities::{
    Favorite, Ingredient, Recipe, RecipeIngredient, RecipeTag, ShoppingCart, Subscription, Tag,
    User,
};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
    sea_query::TableCreateStatement,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/recipe_box.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
///
/// Falls back to a local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    tracing::debug!("Connecting to database at {}", database_url);
    Database::connect(&database_url).await.map_err(Into::into)
}

fn table_for<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    table
}

/// Creates all tables that do not exist yet.
///
/// Reference tables are created before the tables that point at them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let tables = [
        table_for(&schema, User),
        table_for(&schema, Tag),
        table_for(&schema, Ingredient),
        table_for(&schema, Recipe),
        table_for(&schema, RecipeTag),
        table_for(&schema, RecipeIngredient),
        table_for(&schema, Favorite),
        table_for(&schema, ShoppingCart),
        table_for(&schema, Subscription),
    ];

    for table in &tables {
        db.execute(builder.build(table)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _ = User::find().limit(1).all(&db).await?;
        let _ = Tag::find().limit(1).all(&db).await?;
        let _ = Ingredient::find().limit(1).all(&db).await?;
        let _ = Recipe::find().limit(1).all(&db).await?;
        let _ = RecipeTag::find().limit(1).all(&db).await?;
        let _ = RecipeIngredient::find().limit(1).all(&db).await?;
        let _ = Favorite::find().limit(1).all(&db).await?;
        let _ = ShoppingCart::find().limit(1).all(&db).await?;
        let _ = Subscription::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
