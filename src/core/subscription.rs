//! Subscription business logic - Following authors.
//!
//! Subscribing validates the pair before writing: a user cannot follow themselves and
//! cannot follow the same author twice. Unsubscribing is idempotent.

use crate::{
    core::{
        projection::{self, SubscriptionView},
        user::require_user,
    },
    entities::{Subscription, User, subscription, user},
    errors::{Error, Result},
};
use sea_orm::{DbErr, PaginatorTrait, QueryOrder, Set, SqlErr, prelude::*};

/// Whether `subscriber_id` follows `author_id`.
pub async fn is_subscribed(
    db: &DatabaseConnection,
    subscriber_id: i64,
    author_id: i64,
) -> Result<bool> {
    let count = Subscription::find()
        .filter(subscription::Column::SubscriberId.eq(subscriber_id))
        .filter(subscription::Column::AuthorId.eq(author_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

fn duplicate_or_database(err: DbErr, author_id: i64) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::DuplicateSubscription { author_id },
        _ => Error::Database(err),
    }
}

/// Inserts the (subscriber, author) row; a store-level duplicate maps to
/// [`Error::DuplicateSubscription`].
async fn insert_subscription(
    db: &DatabaseConnection,
    subscriber_id: i64,
    author_id: i64,
) -> Result<()> {
    let row = subscription::ActiveModel {
        subscriber_id: Set(subscriber_id),
        author_id: Set(author_id),
        created_at: Set(chrono::Utc::now()),
    };
    Subscription::insert(row)
        .exec_without_returning(db)
        .await
        .map_err(|e| duplicate_or_database(e, author_id))?;
    Ok(())
}

/// Makes `subscriber_id` follow `author_id` and returns the author.
///
/// # Errors
/// - [`Error::SelfSubscription`] if both ids are the same
/// - [`Error::NotFound`] if the subscriber or the author does not exist
/// - [`Error::DuplicateSubscription`] if the pair already exists
pub async fn subscribe(
    db: &DatabaseConnection,
    subscriber_id: i64,
    author_id: i64,
) -> Result<user::Model> {
    if subscriber_id == author_id {
        return Err(Error::SelfSubscription);
    }

    require_user(db, subscriber_id).await?;
    let author = require_user(db, author_id).await?;

    if is_subscribed(db, subscriber_id, author_id).await? {
        return Err(Error::DuplicateSubscription { author_id });
    }

    insert_subscription(db, subscriber_id, author_id).await?;

    tracing::info!(subscriber_id, author_id, "Subscribed to author");
    Ok(author)
}

/// Stops `subscriber_id` following `author_id`.
///
/// Removing a subscription that does not exist succeeds without doing anything. The
/// returned flag tells whether a row was deleted.
pub async fn unsubscribe(
    db: &DatabaseConnection,
    subscriber_id: i64,
    author_id: i64,
) -> Result<bool> {
    let result = Subscription::delete_many()
        .filter(subscription::Column::SubscriberId.eq(subscriber_id))
        .filter(subscription::Column::AuthorId.eq(author_id))
        .exec(db)
        .await?;

    let removed = result.rows_affected > 0;
    if removed {
        tracing::info!(subscriber_id, author_id, "Unsubscribed from author");
    } else {
        tracing::debug!(subscriber_id, author_id, "Unsubscribe of absent pair ignored");
    }
    Ok(removed)
}

/// Authors followed by `subscriber_id`, ordered by username.
pub async fn list_followed_authors(
    db: &DatabaseConnection,
    subscriber_id: i64,
) -> Result<Vec<user::Model>> {
    let author_ids: Vec<i64> = Subscription::find()
        .filter(subscription::Column::SubscriberId.eq(subscriber_id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.author_id)
        .collect();

    User::find()
        .filter(user::Column::Id.is_in(author_ids))
        .order_by_asc(user::Column::Username)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Followed authors with a preview of up to `recipes_limit` recipes each.
pub async fn list_subscriptions(
    db: &DatabaseConnection,
    subscriber_id: i64,
    recipes_limit: Option<u64>,
) -> Result<Vec<SubscriptionView>> {
    let authors = list_followed_authors(db, subscriber_id).await?;
    let mut views = Vec::with_capacity(authors.len());
    for author in authors {
        views.push(projection::project_subscription(db, author, recipes_limit).await?);
    }
    Ok(views)
}
