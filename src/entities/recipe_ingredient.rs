//! Recipe ingredient entity - The quantified association between a recipe and an ingredient.
//!
//! Each (recipe, ingredient) pair appears at most once; `amount` is at least 1 and is
//! expressed in the ingredient's measurement unit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe ingredient database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe_ingredients")]
pub struct Model {
    /// ID of the owning recipe
    #[sea_orm(primary_key, auto_increment = false)]
    pub recipe_id: i64,
    /// ID of the ingredient
    #[sea_orm(primary_key, auto_increment = false)]
    pub ingredient_id: i64,
    /// Quantity in the ingredient's measurement unit
    pub amount: i32,
}

/// Defines relationships between the row and its endpoints
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Row belongs to one recipe
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id",
        on_delete = "Cascade"
    )]
    Recipe,
    /// Row points at one ingredient
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient::Column::Id",
        on_delete = "Cascade"
    )]
    Ingredient,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
