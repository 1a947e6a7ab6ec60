//! Subscription entity - A follower relationship between two users.
//!
//! Unique per (subscriber, author). Self-subscription is rejected before insert,
//! not by the store.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscription database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    /// ID of the following user
    #[sea_orm(primary_key, auto_increment = false)]
    pub subscriber_id: i64,
    /// ID of the followed author
    #[sea_orm(primary_key, auto_increment = false)]
    pub author_id: i64,
    /// When the subscription was made
    pub created_at: DateTimeUtc,
}

/// Both ends of a subscription reference the users table
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The following user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SubscriberId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Subscriber,
    /// The followed author
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl ActiveModelBehavior for ActiveModel {}
