//! Username Value Object
//!
//! The login handle of a principal. Compared byte-for-byte: no case folding
//! and no Unicode normalization, so `Admin` and `admin` are different
//! principals.
//!
//! ## Invariants
//! - 1 to [`USERNAME_MAX_LENGTH`] characters
//! - no whitespace, no control characters

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username cannot contain whitespace or control characters")]
    InvalidCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(raw: impl Into<String>) -> Result<Self, UsernameError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(UsernameError::Empty);
        }

        let char_count = raw.chars().count();
        if char_count > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: USERNAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
