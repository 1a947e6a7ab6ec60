//! Tag business logic - Shared reference data for categorising recipes.

use crate::{
    entities::{Tag, tag},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Returns true for a `#RRGGBB` hex colour code.
#[must_use]
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true for a non-empty slug made of letters, digits, `-` and `_`.
#[must_use]
pub fn is_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Creates a tag after checking the colour and slug formats.
///
/// # Errors
/// Returns an error if:
/// - the name is empty
/// - the colour is not a `#RRGGBB` code or the slug has invalid characters
/// - the name, colour or slug is already used by another tag
pub async fn create_tag(
    db: &DatabaseConnection,
    name: String,
    color: String,
    slug: String,
) -> Result<tag::Model> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::MissingField { field: "name" });
    }
    if !is_hex_color(&color) {
        return Err(Error::InvalidValue {
            field: "color",
            message: format!("'{color}' is not a #RRGGBB colour code"),
        });
    }
    if !is_slug(&slug) {
        return Err(Error::InvalidValue {
            field: "slug",
            message: format!("'{slug}' may only contain letters, digits, '-' and '_'"),
        });
    }

    let tag = tag::ActiveModel {
        name: Set(name),
        color: Set(color.to_uppercase()),
        slug: Set(slug.clone()),
        ..Default::default()
    };
    tag.insert(db)
        .await
        .map_err(|e| Error::from_insert(e, "tag", slug))
}

/// Lists all tags ordered by name.
pub async fn list_tags(db: &DatabaseConnection) -> Result<Vec<tag::Model>> {
    Tag::find()
        .order_by_asc(tag::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a tag by id.
pub async fn get_tag_by_id(db: &DatabaseConnection, tag_id: i64) -> Result<Option<tag::Model>> {
    Tag::find_by_id(tag_id).one(db).await.map_err(Into::into)
}

/// Finds a tag by slug.
pub async fn get_tag_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<tag::Model>> {
    Tag::find()
        .filter(tag::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_color_and_slug_formats() {
        assert!(is_hex_color("#49B64E"));
        assert!(is_hex_color("#abcdef"));
        assert!(!is_hex_color("49B64E"));
        assert!(!is_hex_color("#49B64"));
        assert!(!is_hex_color("#49B64G"));

        assert!(is_slug("dinner"));
        assert!(is_slug("late_night-snack2"));
        assert!(!is_slug(""));
        assert!(!is_slug("main course"));
    }

    #[tokio::test]
    async fn test_create_tag_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_tag(&db, " ".into(), "#FFFFFF".into(), "x".into()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingField { field: "name" }
        ));

        let result = create_tag(&db, "Lunch".into(), "green".into(), "lunch".into()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidValue { field: "color", .. }
        ));

        let result = create_tag(&db, "Lunch".into(), "#00FF00".into(), "lun ch".into()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidValue { field: "slug", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_find_tag() -> Result<()> {
        let db = setup_test_db().await?;

        let tag = create_test_tag(&db, "lunch").await?;
        assert_eq!(tag.slug, "lunch");

        assert_eq!(get_tag_by_id(&db, tag.id).await?, Some(tag.clone()));
        assert_eq!(get_tag_by_slug(&db, "lunch").await?, Some(tag));
        assert!(get_tag_by_slug(&db, "dinner").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_tag_uniqueness() -> Result<()> {
        let db = setup_test_db().await?;
        create_tag(&db, "Lunch".into(), "#00FF00".into(), "lunch".into()).await?;

        // Same colour, different name and slug
        let result = create_tag(&db, "Brunch".into(), "#00ff00".into(), "brunch".into()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AlreadyExists { entity: "tag", .. }
        ));

        // Same slug
        let result = create_tag(&db, "Lunch 2".into(), "#0000FF".into(), "lunch".into()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AlreadyExists { entity: "tag", .. }
        ));

        assert_eq!(list_tags(&db).await?.len(), 1);
        Ok(())
    }
}
