//! The identity a core operation runs on behalf of.
//!
//! The boundary layer resolves authentication and passes the result explicitly; no
//! operation reads the caller from ambient state.

use crate::errors::{Error, Result};

/// Who is making the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Caller {
    /// No authenticated user
    #[default]
    Anonymous,
    /// An authenticated user, by id
    User(i64),
}

impl Caller {
    /// The caller's user id, if authenticated.
    #[must_use]
    pub const fn user_id(self) -> Option<i64> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(id),
        }
    }

    /// The caller's user id, or [`Error::Unauthenticated`] naming `action`.
    pub fn require(self, action: &'static str) -> Result<i64> {
        match self {
            Self::Anonymous => Err(Error::Unauthenticated { action }),
            Self::User(id) => Ok(id),
        }
    }
}

impl From<Option<i64>> for Caller {
    fn from(user_id: Option<i64>) -> Self {
        user_id.map_or(Self::Anonymous, Self::User)
    }
}
