//! Session Claims
//!
//! The signed body of an admin session token. Claims are created once at
//! authentication and never mutated; nothing about them is stored
//! server-side.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::principal::Principal;
use crate::domain::value_object::{principal_role::PrincipalRole, username::Username};

/// `kind` discriminator for tokens minted by this service
pub const ADMIN_TOKEN_KIND: &str = "admin";

/// Claims on the wire carry `iat`/`exp` as unix seconds. Values outside
/// chrono's range fail to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the principal's username
    pub sub: Username,
    /// Role at issuance time
    pub role: PrincipalRole,
    /// Issued at, whole seconds
    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,
    /// Expires at, `iat + ttl`
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
    /// Token family discriminator
    pub kind: String,
    /// Token id, reserved for a denylist
    pub jti: Uuid,
}

impl SessionClaims {
    /// `None` when `now + ttl` is not representable
    pub fn issue(principal: &Principal, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let iat = now.trunc_subsecs(0);
        let exp = iat.checked_add_signed(ttl)?;

        Some(Self {
            sub: principal.username.clone(),
            role: principal.role,
            iat,
            exp,
            kind: ADMIN_TOKEN_KIND.to_string(),
            jti: Uuid::new_v4(),
        })
    }

    /// Valid through the `exp` second itself
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp.timestamp()
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.iat
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.exp
    }
}
