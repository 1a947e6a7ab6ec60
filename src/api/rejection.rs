//! Structured rejections returned by every handler.

use crate::errors::Error;
use serde::Serialize;

/// Handler result type
pub type ApiResult<T> = std::result::Result<T, Rejection>;

/// A refused request: an HTTP-style status, the payload field it concerns (for
/// validation failures) and a message safe to show the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 400, 401, 403, 404 or 500
    pub status: u16,
    /// Field the rejection is scoped to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    /// Human-readable reason
    pub message: String,
}

impl Rejection {
    /// Status code for an error.
    #[must_use]
    pub const fn status_for(err: &Error) -> u16 {
        match err {
            Error::MissingField { .. }
            | Error::EmptySet { .. }
            | Error::DuplicateIngredient { .. }
            | Error::UnknownIngredient { .. }
            | Error::UnknownTag { .. }
            | Error::InvalidValue { .. }
            | Error::SelfSubscription
            | Error::DuplicateSubscription { .. }
            | Error::AlreadyExists { .. } => 400,
            Error::Unauthenticated { .. } => 401,
            Error::Forbidden { .. } => 403,
            Error::NotFound { .. } => 404,
            Error::Config { .. } | Error::Database(_) | Error::Io(_) => 500,
        }
    }
}

impl From<Error> for Rejection {
    fn from(err: Error) -> Self {
        let status = Self::status_for(&err);
        if status >= 500 {
            // Internal details stay in the log
            tracing::error!(error = %err, "Request failed");
            return Self {
                status,
                field: None,
                message: "internal server error".to_string(),
            };
        }

        tracing::debug!(status, error = %err, "Request rejected");
        Self {
            status,
            field: err.field(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_validation_errors_are_field_scoped() {
        let rejection = Rejection::from(Error::EmptySet { field: "tags" });
        assert_eq!(rejection.status, 400);
        assert_eq!(rejection.field, Some("tags"));
        assert_eq!(rejection.message, "tags: select at least one entry");

        let rejection = Rejection::from(Error::DuplicateIngredient { id: 7 });
        assert_eq!(rejection.status, 400);
        assert_eq!(rejection.field, Some("ingredients"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Rejection::from(Error::Unauthenticated { action: "x" }).status,
            401
        );
        assert_eq!(Rejection::from(Error::Forbidden { action: "x" }).status, 403);
        assert_eq!(
            Rejection::from(Error::NotFound {
                entity: "recipe",
                id: "9".to_string()
            })
            .status,
            404
        );
        assert_eq!(Rejection::from(Error::SelfSubscription).status, 400);
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let rejection = Rejection::from(Error::Database(DbErr::Custom("disk on fire".to_string())));
        assert_eq!(rejection.status, 500);
        assert_eq!(rejection.field, None);
        assert!(!rejection.message.contains("disk"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Rejection::from(Error::MissingField { field: "name" }))
            .unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["field"], "name");

        let json = serde_json::to_value(Rejection::from(Error::Forbidden { action: "x" })).unwrap();
        assert!(json.get("field").is_none());
    }
}
