//! Unified error types and result handling.
//!
//! Every failure a core operation can produce is a variant of [`Error`]. Validation
//! failures carry the name of the field they concern so the boundary layer can report
//! a field-scoped rejection; nothing here is fatal to the process.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Application error type shared by the core and the boundary layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A required scalar field was absent or empty
    #[error("{field}: this field is required")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A collection field that must hold at least one entry was empty
    #[error("{field}: select at least one entry")]
    EmptySet {
        /// Name of the empty collection field
        field: &'static str,
    },

    /// The same ingredient was submitted more than once for one recipe
    #[error("ingredients: ingredient {id} has already been added")]
    DuplicateIngredient {
        /// Ingredient id that was repeated
        id: i64,
    },

    /// A recipe referenced an ingredient that does not exist
    #[error("ingredients: ingredient {id} does not exist")]
    UnknownIngredient {
        /// Ingredient id that could not be resolved
        id: i64,
    },

    /// A recipe referenced a tag that does not exist
    #[error("tags: tag {id} does not exist")]
    UnknownTag {
        /// Tag id that could not be resolved
        id: i64,
    },

    /// A field was present but its value is not acceptable
    #[error("{field}: {message}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// A user tried to subscribe to themselves
    #[error("author: you cannot subscribe to yourself")]
    SelfSubscription,

    /// The subscriber already follows this author
    #[error("author: already subscribed to author {author_id}")]
    DuplicateSubscription {
        /// Author that is already followed
        author_id: i64,
    },

    /// A referenced entity does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of entity (e.g. "recipe", "user")
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// The row being created already exists
    #[error("{entity} already exists: {detail}")]
    AlreadyExists {
        /// Kind of entity (e.g. "favorite", "tag")
        entity: &'static str,
        /// What collided
        detail: String,
    },

    /// The caller is authenticated but not allowed to perform the action
    #[error("not allowed to {action}")]
    Forbidden {
        /// Action that was refused
        action: &'static str,
    },

    /// The action requires an authenticated caller
    #[error("authentication required to {action}")]
    Unauthenticated {
        /// Action that was refused
        action: &'static str,
    },

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// The relational store reported an error
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the payload field a validation error is scoped to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field }
            | Self::EmptySet { field }
            | Self::InvalidValue { field, .. } => Some(*field),
            Self::DuplicateIngredient { .. } | Self::UnknownIngredient { .. } => {
                Some("ingredients")
            }
            Self::UnknownTag { .. } => Some("tags"),
            Self::SelfSubscription | Self::DuplicateSubscription { .. } => Some("author"),
            _ => None,
        }
    }

    /// Converts a store-level unique violation into [`Error::AlreadyExists`],
    /// passing every other database error through unchanged.
    pub(crate) fn from_insert(err: DbErr, entity: &'static str, detail: String) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::AlreadyExists { entity, detail },
            _ => Self::Database(err),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
