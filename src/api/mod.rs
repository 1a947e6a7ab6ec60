//! Boundary layer - one explicit handler per outward operation.
//!
//! Handlers take the shared [`AppState`], the [`Caller`](crate::core::caller::Caller)
//! making the request and the operation's input. They compose core calls, project
//! the result for the caller, and turn every [`Error`](crate::errors::Error) into a
//! [`Rejection`]. Routing and transport are left to whatever embeds this crate.

/// Recipe reads and writes, favorites, shopping cart and the shopping list download
pub mod recipes;
/// Tag and ingredient lookups
pub mod reference;
/// Error to rejection mapping
pub mod rejection;
/// User profiles and subscriptions
pub mod users;

use sea_orm::DatabaseConnection;

pub use rejection::{ApiResult, Rejection};

/// Shared data available to all handlers.
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates the shared state around an open connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}
