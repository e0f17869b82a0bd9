//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::TokenAuthority;
use crate::domain::repository::PrincipalRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, SessionResponse};
use crate::presentation::middleware::AuthenticatedAdmin;

/// Shared state for admin auth handlers
#[derive(Clone)]
pub struct AdminAuthState<R>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    pub authority: Arc<TokenAuthority<R>>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/admin/auth/login
pub async fn login<R>(
    State(state): State<AdminAuthState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let output = state.authority.authenticate(req.username, req.password).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Current Session
// ============================================================================

/// GET /api/admin/auth/me
pub async fn me(admin: AuthenticatedAdmin) -> Json<SessionResponse> {
    Json(SessionResponse::from(admin.claims()))
}
