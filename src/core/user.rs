//! User business logic - Profile records for authors and followers.
//!
//! Account credentials are handled outside this crate; these functions only manage
//! the profile row that recipes, favorites and subscriptions refer to.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields needed to register a user profile.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login e-mail address
    pub email: String,
    /// Public handle
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Grants edit/delete rights over every recipe
    pub is_admin: bool,
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Creates a user profile.
///
/// # Errors
/// Returns an error if:
/// - any of the name fields or the e-mail is empty
/// - the e-mail does not contain `@`
/// - the e-mail or username is already taken
pub async fn create_user(db: &DatabaseConnection, new_user: NewUser) -> Result<user::Model> {
    let email = required(&new_user.email, "email")?;
    let username = required(&new_user.username, "username")?;
    let first_name = required(&new_user.first_name, "first_name")?;
    let last_name = required(&new_user.last_name, "last_name")?;

    if !email.contains('@') {
        return Err(Error::InvalidValue {
            field: "email",
            message: "enter a valid e-mail address".to_string(),
        });
    }

    let user = user::ActiveModel {
        email: Set(email.clone()),
        username: Set(username.clone()),
        first_name: Set(first_name),
        last_name: Set(last_name),
        is_admin: Set(new_user.is_admin),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let user = user
        .insert(db)
        .await
        .map_err(|e| Error::from_insert(e, "user", format!("{username} <{email}>")))?;
    tracing::info!(user_id = user.id, "Registered user {}", user.username);
    Ok(user)
}

/// Finds a user by id.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by id, failing with [`Error::NotFound`] if absent.
pub async fn require_user(db: &DatabaseConnection, user_id: i64) -> Result<user::Model> {
    get_user_by_id(db, user_id)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "user",
            id: user_id.to_string(),
        })
}

/// Lists all users ordered by username.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Username)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_user_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let mut new_user = new_user_fields("cook");
        new_user.username = "  ".to_string();
        let result = create_user(&db, new_user).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingField { field: "username" }
        ));

        let mut new_user = new_user_fields("cook");
        new_user.email = "not-an-email".to_string();
        let result = create_user(&db, new_user).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidValue { field: "email", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_get_user() -> Result<()> {
        let db = setup_test_db().await?;

        let user = create_test_user(&db, "alice").await?;
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.is_admin);

        let found = get_user_by_id(&db, user.id).await?;
        assert_eq!(found, Some(user));

        assert!(get_user_by_id(&db, 999).await?.is_none());
        assert!(matches!(
            require_user(&db, 999).await.unwrap_err(),
            Error::NotFound { entity: "user", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "alice").await?;

        let mut again = new_user_fields("alice");
        again.email = "other@example.com".to_string();
        let result = create_user(&db, again).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AlreadyExists { entity: "user", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_users_ordered_by_username() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "carol").await?;
        create_test_user(&db, "alice").await?;
        create_test_user(&db, "bob").await?;

        let names: Vec<String> = list_users(&db)
            .await?
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);

        Ok(())
    }
}
