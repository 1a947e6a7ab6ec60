//! Shopping cart entity - Marks a recipe for inclusion in a user's shopping list.
//! Same lifecycle as a favorite: one row per (user, recipe).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shopping cart entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping_cart")]
pub struct Model {
    /// ID of the user whose cart holds the recipe
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    /// ID of the recipe in the cart
    #[sea_orm(primary_key, auto_increment = false)]
    pub recipe_id: i64,
    /// When the recipe was added
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id",
        on_delete = "Cascade"
    )]
    Recipe,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
