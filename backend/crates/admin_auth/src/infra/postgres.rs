//! PostgreSQL Credential Store

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::principal::Principal;
use crate::domain::repository::PrincipalRepository;
use crate::domain::value_object::{
    principal_password::PasswordHash, principal_role::PrincipalRole, username::Username,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed principal repository over `admin_principals`
#[derive(Clone)]
pub struct PgPrincipalRepository {
    pool: PgPool,
}

impl PgPrincipalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PrincipalRepository for PgPrincipalRepository {
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Principal>> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            SELECT
                username,
                password_hash,
                role,
                is_bootstrap,
                created_at,
                last_login_at
            FROM admin_principals
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PrincipalRow::into_principal).transpose()
    }

    async fn create(&self, principal: &Principal) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_principals (
                username,
                password_hash,
                role,
                is_bootstrap,
                created_at,
                last_login_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(principal.username.as_str())
        .bind(principal.password_hash.as_phc_string())
        .bind(principal.role.id())
        .bind(principal.is_bootstrap)
        .bind(principal.created_at)
        .bind(principal.last_login_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_last_login(&self, username: &Username, at: DateTime<Utc>) -> AuthResult<()> {
        sqlx::query("UPDATE admin_principals SET last_login_at = $2 WHERE username = $1")
            .bind(username.as_str())
            .bind(at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> AuthResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin_principals")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn delete(&self, username: &Username) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM admin_principals WHERE username = $1")
            .bind(username.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!(username = %username, "Admin principal deleted");
        }

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PrincipalRow {
    username: String,
    password_hash: String,
    role: i16,
    is_bootstrap: bool,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl PrincipalRow {
    fn into_principal(self) -> AuthResult<Principal> {
        let username = Username::new(self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid username: {}", e)))?;

        let password_hash = PasswordHash::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        let role = PrincipalRole::from_id(self.role)
            .ok_or_else(|| AuthError::Internal(format!("Unknown role id: {}", self.role)))?;

        Ok(Principal {
            username,
            password_hash,
            role,
            is_bootstrap: self.is_bootstrap,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        })
    }
}
