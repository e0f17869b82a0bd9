use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative role carried by a principal and copied into its tokens.
///
/// Only `SuperAdmin` may perform irreversible operations; the check itself
/// lives with whoever performs those operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum PrincipalRole {
    #[default]
    Admin = 2,
    SuperAdmin = 3,
}

impl PrincipalRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            PrincipalRole::Admin => "admin",
            PrincipalRole::SuperAdmin => "super_admin",
        }
    }

    #[inline]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self, PrincipalRole::SuperAdmin)
    }

    /// Map a persisted id back to a role. Unknown ids are rejected rather
    /// than defaulted.
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            2 => Some(PrincipalRole::Admin),
            3 => Some(PrincipalRole::SuperAdmin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(PrincipalRole::Admin),
            "super_admin" => Some(PrincipalRole::SuperAdmin),
            _ => None,
        }
    }
}

impl fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
