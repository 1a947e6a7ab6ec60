//! Reference data seeding.
//!
//! Inserts the tags and ingredients listed in the catalog file that are not in the
//! database yet. Tags are matched by slug, ingredients by name and unit, so running
//! the seed repeatedly is harmless.

use crate::{
    config::catalog::Catalog,
    core::{ingredient, tag},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// How many rows a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Tags inserted
    pub tags_created: usize,
    /// Ingredients inserted
    pub ingredients_created: usize,
}

/// Seeds missing tags and ingredients from `catalog`.
pub async fn seed_catalog(db: &DatabaseConnection, catalog: &Catalog) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for tag_config in &catalog.tags {
        if tag::get_tag_by_slug(db, &tag_config.slug).await?.is_some() {
            tracing::debug!("Tag '{}' already present", tag_config.slug);
            continue;
        }
        tag::create_tag(
            db,
            tag_config.name.clone(),
            tag_config.color.clone(),
            tag_config.slug.clone(),
        )
        .await?;
        summary.tags_created += 1;
    }

    for ingredient_config in &catalog.ingredients {
        let (_, created) = ingredient::get_or_create_ingredient(
            db,
            ingredient_config.name.clone(),
            ingredient_config.measurement_unit.clone(),
        )
        .await?;
        if created {
            summary.ingredients_created += 1;
        }
    }

    tracing::info!(
        tags_created = summary.tags_created,
        ingredients_created = summary.ingredients_created,
        "Catalog seeded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::catalog::parse_catalog;
    use crate::errors::Error;
    use crate::test_utils::*;

    const CATALOG: &str = r##"
        [[tags]]
        name = "Breakfast"
        color = "#E26C2D"
        slug = "breakfast"

        [[tags]]
        name = "Dinner"
        color = "#8775D2"
        slug = "dinner"

        [[ingredients]]
        name = "salt"
        measurement_unit = "g"

        [[ingredients]]
        name = "milk"
        measurement_unit = "ml"
    "##;

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let catalog = parse_catalog(CATALOG)?;

        let first = seed_catalog(&db, &catalog).await?;
        assert_eq!(
            first,
            SeedSummary {
                tags_created: 2,
                ingredients_created: 2
            }
        );

        let second = seed_catalog(&db, &catalog).await?;
        assert_eq!(second, SeedSummary::default());

        assert_eq!(tag::list_tags(&db).await?.len(), 2);
        assert_eq!(ingredient::search_ingredients(&db, "").await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_tag_in_catalog_fails() -> Result<()> {
        let db = setup_test_db().await?;
        let catalog = parse_catalog(
            r#"
            [[tags]]
            name = "Broken"
            color = "red"
            slug = "broken"
            "#,
        )?;

        let result = seed_catalog(&db, &catalog).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidValue { field: "color", .. }
        ));
        Ok(())
    }
}
