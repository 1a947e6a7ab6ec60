//! Read projections - The outward-facing shape of recipes and users.
//!
//! Projections carry request-scoped flags computed against the store for the given
//! [`Caller`]: `is_favorited` and `is_in_shopping_cart` for recipes, `is_subscribed`
//! for users. Anonymous callers always see these flags as false, and no query is made
//! for them.

use crate::{
    core::{
        caller::Caller,
        favorite, recipe as recipes, shopping_cart, subscription,
        user::require_user,
    },
    entities::{recipe, tag, user},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// A user as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    /// User id
    pub id: i64,
    /// E-mail address
    pub email: String,
    /// Public handle
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Whether the caller follows this user
    pub is_subscribed: bool,
}

impl UserView {
    fn new(user: user::Model, is_subscribed: bool) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed,
        }
    }
}

/// One ingredient line of a projected recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeIngredientView {
    /// Ingredient id
    pub id: i64,
    /// Ingredient name
    pub name: String,
    /// Unit of `amount`
    pub measurement_unit: String,
    /// Quantity used by the recipe
    pub amount: i32,
}

/// A full recipe as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeView {
    /// Recipe id
    pub id: i64,
    /// Attached tags
    pub tags: Vec<tag::Model>,
    /// The author, projected for the same caller
    pub author: UserView,
    /// Ingredient lines
    pub ingredients: Vec<RecipeIngredientView>,
    /// Whether the caller has favorited the recipe
    pub is_favorited: bool,
    /// Whether the recipe is in the caller's shopping cart
    pub is_in_shopping_cart: bool,
    /// Dish name
    pub name: String,
    /// Image reference
    pub image: Option<String>,
    /// Cooking instructions
    pub text: String,
    /// Cooking time in minutes
    pub cooking_time: i32,
}

/// Compact recipe form used in favorites, carts and subscription listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortRecipe {
    /// Recipe id
    pub id: i64,
    /// Dish name
    pub name: String,
    /// Image reference
    pub image: Option<String>,
    /// Cooking time in minutes
    pub cooking_time: i32,
}

impl From<recipe::Model> for ShortRecipe {
    fn from(recipe: recipe::Model) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
        }
    }
}

/// A followed author with a preview of their recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionView {
    /// The author; `is_subscribed` is always true here
    #[serde(flatten)]
    pub author: UserView,
    /// Newest recipes by the author, possibly truncated
    pub recipes: Vec<ShortRecipe>,
    /// Total number of recipes by the author
    pub recipes_count: u64,
}

/// Projects a user for `caller`.
pub async fn project_user(
    db: &DatabaseConnection,
    caller: Caller,
    user: user::Model,
) -> Result<UserView> {
    let is_subscribed = match caller.user_id() {
        Some(caller_id) => subscription::is_subscribed(db, caller_id, user.id).await?,
        None => false,
    };
    Ok(UserView::new(user, is_subscribed))
}

/// Projects a recipe for `caller`, loading its author, tags and ingredients.
pub async fn project_recipe(
    db: &DatabaseConnection,
    caller: Caller,
    recipe: recipe::Model,
) -> Result<RecipeView> {
    let author = require_user(db, recipe.author_id).await?;
    let author = project_user(db, caller, author).await?;
    let tags = recipes::get_recipe_tags(db, recipe.id).await?;
    let ingredients = recipes::get_recipe_ingredients(db, recipe.id)
        .await?
        .into_iter()
        .map(|(row, ingredient)| RecipeIngredientView {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
            amount: row.amount,
        })
        .collect();

    let (is_favorited, is_in_shopping_cart) = match caller.user_id() {
        Some(user_id) => (
            favorite::is_favorited(db, user_id, recipe.id).await?,
            shopping_cart::is_in_cart(db, user_id, recipe.id).await?,
        ),
        None => (false, false),
    };

    Ok(RecipeView {
        id: recipe.id,
        tags,
        author,
        ingredients,
        is_favorited,
        is_in_shopping_cart,
        name: recipe.name,
        image: recipe.image,
        text: recipe.text,
        cooking_time: recipe.cooking_time,
    })
}

/// Projects each recipe in order.
pub async fn project_recipes(
    db: &DatabaseConnection,
    caller: Caller,
    recipes: Vec<recipe::Model>,
) -> Result<Vec<RecipeView>> {
    let mut views = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        views.push(project_recipe(db, caller, recipe).await?);
    }
    Ok(views)
}

/// Projects a followed author with up to `recipes_limit` of their newest recipes.
pub async fn project_subscription(
    db: &DatabaseConnection,
    author: user::Model,
    recipes_limit: Option<u64>,
) -> Result<SubscriptionView> {
    let recipes = recipes::list_recipes_by_author(db, author.id, recipes_limit)
        .await?
        .into_iter()
        .map(ShortRecipe::from)
        .collect();
    let recipes_count = recipes::count_recipes_by_author(db, author.id).await?;

    Ok(SubscriptionView {
        author: UserView::new(author, true),
        recipes,
        recipes_count,
    })
}
