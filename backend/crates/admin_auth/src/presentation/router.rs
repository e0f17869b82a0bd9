//! Admin Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::TokenAuthority;
use crate::domain::repository::PrincipalRepository;
use crate::presentation::handlers::{self, AdminAuthState};
use crate::presentation::middleware::require_admin;

/// Create the admin auth router, to be nested under `/api/admin/auth`
pub fn admin_auth_router<R>(authority: Arc<TokenAuthority<R>>) -> Router
where
    R: PrincipalRepository + Clone + Send + Sync + 'static,
{
    let state = AdminAuthState { authority };

    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin::<R>));

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
