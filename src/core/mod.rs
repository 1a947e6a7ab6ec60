//! Core business logic - framework-agnostic recipe, favorite, subscription and
//! shopping-list operations. Every operation takes the database connection and, where
//! the result depends on who is asking, an explicit [`caller::Caller`].

pub mod caller;
pub mod catalog;
pub mod favorite;
pub mod ingredient;
pub mod projection;
pub mod recipe;
pub mod shopping_cart;
pub mod shopping_list;
pub mod subscription;
pub mod tag;
pub mod user;
pub mod validation;
