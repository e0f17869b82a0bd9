//! Token Authority and HTTP surface tests

#[cfg(test)]
mod support {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use chrono::{DateTime, Utc};

    use crate::application::config::AuthConfig;
    use crate::application::token_authority::TokenAuthority;
    use crate::domain::entity::principal::Principal;
    use crate::domain::repository::PrincipalRepository;
    use crate::domain::value_object::{
        principal_password::{NewPassword, PasswordHash},
        principal_role::PrincipalRole,
        username::Username,
    };
    use crate::error::{AuthError, AuthResult};
    use crate::infra::memory::InMemoryPrincipalRepository;

    pub const EDITOR_PASSWORD: &str = "Editorial-Desk-42";

    pub fn config() -> AuthConfig {
        AuthConfig {
            store_timeout: Duration::from_millis(200),
            ..AuthConfig::development()
        }
    }

    pub fn authority(repo: &InMemoryPrincipalRepository) -> TokenAuthority<InMemoryPrincipalRepository> {
        TokenAuthority::new(Arc::new(repo.clone()), Arc::new(config()))
    }

    pub async fn seed(repo: &InMemoryPrincipalRepository, name: &str, role: PrincipalRole) {
        let password = NewPassword::new(EDITOR_PASSWORD.to_string()).unwrap();
        let principal = Principal::new(
            Username::new(name).unwrap(),
            PasswordHash::from_new(&password, None).unwrap(),
            role,
        );
        repo.create(&principal).await.unwrap();
    }

    /// Store wrapper that can stall, fail, or fail only last-login writes
    #[derive(Clone, Default)]
    pub struct FaultyRepository {
        pub inner: InMemoryPrincipalRepository,
        pub stall: Arc<AtomicBool>,
        pub down: Arc<AtomicBool>,
        pub fail_last_login: Arc<AtomicBool>,
    }

    impl FaultyRepository {
        async fn gate(&self) -> AuthResult<()> {
            if self.stall.load(Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
            if self.down.load(Ordering::SeqCst) {
                return Err(AuthError::StoreUnavailable("connection refused".to_string()));
            }
            Ok(())
        }
    }

    impl PrincipalRepository for FaultyRepository {
        async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Principal>> {
            self.gate().await?;
            self.inner.find_by_username(username).await
        }

        async fn create(&self, principal: &Principal) -> AuthResult<()> {
            self.gate().await?;
            self.inner.create(principal).await
        }

        async fn update_last_login(&self, username: &Username, at: DateTime<Utc>) -> AuthResult<()> {
            if self.fail_last_login.load(Ordering::SeqCst) {
                return Err(AuthError::StoreUnavailable("write rejected".to_string()));
            }
            self.gate().await?;
            self.inner.update_last_login(username, at).await
        }

        async fn count(&self) -> AuthResult<u64> {
            self.gate().await?;
            self.inner.count().await
        }

        async fn delete(&self, username: &Username) -> AuthResult<bool> {
            self.gate().await?;
            self.inner.delete(username).await
        }
    }
}

#[cfg(test)]
mod authority_tests {
    use chrono::{Duration, Utc};

    use super::support::*;
    use crate::application::BootstrapOutcome;
    use crate::application::config::DEV_BOOTSTRAP_PASSWORD;
    use crate::domain::entity::session_claims::ADMIN_TOKEN_KIND;
    use crate::domain::repository::PrincipalRepository;
    use crate::domain::value_object::{principal_role::PrincipalRole, username::Username};
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryPrincipalRepository;

    #[tokio::test]
    async fn test_authenticate_then_verify_returns_subject_and_role() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        seed(&repo, "chief", PrincipalRole::SuperAdmin).await;
        let authority = authority(&repo);

        for (name, role) in [("editor", PrincipalRole::Admin), ("chief", PrincipalRole::SuperAdmin)] {
            let output = authority.authenticate(name, EDITOR_PASSWORD).await.unwrap();
            assert_eq!(output.principal.username.as_str(), name);
            assert_eq!(output.principal.role, role);

            let claims = authority.verify(&output.token).await.unwrap();
            assert_eq!(claims.sub.as_str(), name);
            assert_eq!(claims.role, role);
            assert_eq!(claims.expires_at(), output.expires_at);
        }
    }

    #[tokio::test]
    async fn test_token_lifetime_matches_ttl() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();
        let claims = authority.codec().decode(&output.token).unwrap();
        assert_eq!(claims.exp - claims.iat, Duration::minutes(480));
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();

        // Still valid at the expiry instant itself
        assert!(authority.verify_at(&output.token, output.expires_at).await.is_ok());

        let later = output.expires_at + Duration::seconds(1);
        let err = authority.verify_at(&output.token, later).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn test_expired_token_for_deleted_principal_is_expired() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();
        repo.delete(&Username::new("editor").unwrap()).await.unwrap();

        let later = output.expires_at + Duration::days(1);
        let err = authority.verify_at(&output.token, later).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let attempts = [
            ("editor", "wrong"),
            ("editor", "editorial-desk-42"),
            ("Editor", EDITOR_PASSWORD),
            ("ghost", EDITOR_PASSWORD),
            ("ghost", "wrong"),
            ("", EDITOR_PASSWORD),
            ("editor", ""),
            ("has space", EDITOR_PASSWORD),
        ];

        for (name, password) in attempts {
            let err = authority.authenticate(name, password).await.unwrap_err();
            assert!(
                matches!(err, AuthError::InvalidCredentials),
                "{name:?} produced {err:?}"
            );
            assert_eq!(err.to_app_error().message(), "Invalid credentials");
        }
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let repo = InMemoryPrincipalRepository::new();
        let authority = authority(&repo);

        assert_eq!(authority.bootstrap().await.unwrap(), BootstrapOutcome::Created);
        assert_eq!(
            authority.bootstrap().await.unwrap(),
            BootstrapOutcome::AlreadyProvisioned
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_skips_non_empty_store() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        assert_eq!(
            authority.bootstrap().await.unwrap(),
            BootstrapOutcome::AlreadyProvisioned
        );
        assert!(
            repo.find_by_username(&Username::new("admin").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_bootstrap_never_overwrites() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "admin", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        authority.bootstrap().await.unwrap();

        let stored = repo
            .find_by_username(&Username::new("admin").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.role, PrincipalRole::Admin);
        assert!(!stored.is_bootstrap);
        assert!(authority.authenticate("admin", DEV_BOOTSTRAP_PASSWORD).await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_bootstrap_creates_one_principal() {
        let repo = InMemoryPrincipalRepository::new();
        let a = authority(&repo);
        let b = authority(&repo);

        let (ra, rb) = tokio::join!(a.bootstrap(), b.bootstrap());
        let outcomes = [ra.unwrap(), rb.unwrap()];

        assert!(outcomes.contains(&BootstrapOutcome::Created));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_deleted_principal_tokens_are_revoked() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();
        assert!(authority.verify(&output.token).await.is_ok());

        repo.delete(&Username::new("editor").unwrap()).await.unwrap();

        let err = authority.verify(&output.token).await.unwrap_err();
        assert!(matches!(err, AuthError::UnknownPrincipal));
        assert!(Utc::now() < output.expires_at);
    }

    #[tokio::test]
    async fn test_bootstrap_then_login_with_default_password() {
        let repo = InMemoryPrincipalRepository::new();
        let authority = authority(&repo);

        authority.bootstrap().await.unwrap();

        let stored = repo
            .find_by_username(&Username::new("admin").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.role, PrincipalRole::SuperAdmin);
        assert!(stored.is_bootstrap);

        let output = authority.authenticate("admin", DEV_BOOTSTRAP_PASSWORD).await.unwrap();
        let claims = authority.verify(&output.token).await.unwrap();
        assert_eq!(claims.kind, ADMIN_TOKEN_KIND);
        assert_eq!(claims.role, PrincipalRole::SuperAdmin);
    }

    #[tokio::test]
    async fn test_repeated_wrong_password_has_no_lockout() {
        let repo = InMemoryPrincipalRepository::new();
        let authority = authority(&repo);
        authority.bootstrap().await.unwrap();

        for _ in 0..3 {
            let err = authority.authenticate("admin", "wrong").await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
        }

        assert!(authority.authenticate("admin", DEV_BOOTSTRAP_PASSWORD).await.is_ok());
    }

    #[tokio::test]
    async fn test_other_token_kind_is_rejected() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();
        let mut claims = authority.codec().decode(&output.token).unwrap();
        claims.kind = "reader".to_string();
        let resigned = authority.codec().sign(&claims).unwrap();

        let err = authority.verify(&resigned).await.unwrap_err();
        assert!(matches!(err, AuthError::WrongTokenKind));
    }

    #[tokio::test]
    async fn test_foreign_family_token_is_wrong_kind() {
        use platform::crypto::{hmac_sha256, to_base64url};

        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let config = config();
        let authority = crate::application::token_authority::TokenAuthority::new(
            std::sync::Arc::new(repo.clone()),
            std::sync::Arc::new(config.clone()),
        );

        // A password-reset token sharing the key: no role, no jti
        let now = Utc::now().timestamp();
        let reset = serde_json::json!({
            "sub": "editor",
            "kind": "password_reset",
            "iat": now,
            "exp": now + 600,
        });
        let payload = to_base64url(reset.to_string().as_bytes());
        let tag = to_base64url(&hmac_sha256(&config.secret_key, payload.as_bytes()));
        let token = format!("{payload}.{tag}");

        let err = authority.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::WrongTokenKind));
    }

    #[tokio::test]
    async fn test_kind_is_checked_before_expiry() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();
        let mut claims = authority.codec().decode(&output.token).unwrap();
        claims.kind = "preview".to_string();
        let resigned = authority.codec().sign(&claims).unwrap();

        let later = output.expires_at + Duration::hours(1);
        let err = authority.verify_at(&resigned, later).await.unwrap_err();
        assert!(matches!(err, AuthError::WrongTokenKind));
    }

    #[tokio::test]
    async fn test_tampered_and_foreign_tokens_are_malformed() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();

        // Flip the last signature character
        let mut tampered = output.token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert!(matches!(
            authority.verify(&tampered).await.unwrap_err(),
            AuthError::MalformedToken
        ));

        // Same store, rotated key
        let rotated = super::support::authority(&repo);
        assert!(matches!(
            rotated.verify(&output.token).await.unwrap_err(),
            AuthError::MalformedToken
        ));

        assert!(matches!(
            authority.verify("not-a-token").await.unwrap_err(),
            AuthError::MalformedToken
        ));
    }

    #[tokio::test]
    async fn test_claims_carry_role_at_issuance() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let authority = authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();

        // Recreate with a different role; the outstanding token keeps its role
        let name = Username::new("editor").unwrap();
        repo.delete(&name).await.unwrap();
        seed(&repo, "editor", PrincipalRole::SuperAdmin).await;

        let claims = authority.verify(&output.token).await.unwrap();
        assert_eq!(claims.role, PrincipalRole::Admin);
    }
}

#[cfg(test)]
mod store_failure_tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::support::*;
    use crate::application::token_authority::TokenAuthority;
    use crate::domain::repository::PrincipalRepository;
    use crate::domain::value_object::{principal_role::PrincipalRole, username::Username};
    use crate::error::AuthError;

    fn faulty_authority(repo: &FaultyRepository) -> TokenAuthority<FaultyRepository> {
        TokenAuthority::new(Arc::new(repo.clone()), Arc::new(config()))
    }

    #[tokio::test]
    async fn test_store_down_is_unavailable_not_invalid() {
        let repo = FaultyRepository::default();
        seed(&repo.inner, "editor", PrincipalRole::Admin).await;
        let authority = faulty_authority(&repo);
        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();

        repo.down.store(true, Ordering::SeqCst);

        let err = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));

        let err = authority.verify(&output.token).await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));

        let err = authority.bootstrap().await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_store_times_out() {
        let repo = FaultyRepository::default();
        repo.stall.store(true, Ordering::SeqCst);
        let authority = faulty_authority(&repo);

        let err = authority.verify_at("x.y", chrono::Utc::now()).await.unwrap_err();
        // Signature fails before the store is touched
        assert!(matches!(err, AuthError::MalformedToken));

        let err = authority.bootstrap().await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_store_times_out_on_authenticate() {
        let repo = FaultyRepository::default();
        seed(&repo.inner, "editor", PrincipalRole::Admin).await;
        repo.stall.store(true, Ordering::SeqCst);
        let authority = faulty_authority(&repo);

        let err = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));

        let err = authority.authenticate("ghost", EDITOR_PASSWORD).await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_store_times_out_on_verify() {
        let repo = FaultyRepository::default();
        seed(&repo.inner, "editor", PrincipalRole::Admin).await;
        let authority = faulty_authority(&repo);
        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();

        repo.stall.store(true, Ordering::SeqCst);

        let err = authority.verify(&output.token).await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_authority_prepares_dummy_hash() {
        let repo = FaultyRepository::default();
        let _authority = faulty_authority(&repo);
        assert!(platform::password::HashedPassword::dummy_is_ready());
    }

    #[tokio::test]
    async fn test_failed_last_login_does_not_fail_login() {
        let repo = FaultyRepository::default();
        seed(&repo.inner, "editor", PrincipalRole::Admin).await;
        repo.fail_last_login.store(true, Ordering::SeqCst);
        let authority = faulty_authority(&repo);

        let output = authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();
        assert!(authority.verify(&output.token).await.is_ok());
    }

    #[tokio::test]
    async fn test_last_login_is_recorded() {
        let repo = FaultyRepository::default();
        seed(&repo.inner, "editor", PrincipalRole::Admin).await;
        let authority = faulty_authority(&repo);
        let name = Username::new("editor").unwrap();

        assert!(repo.inner.find_by_username(&name).await.unwrap().unwrap().last_login_at.is_none());

        authority.authenticate("editor", EDITOR_PASSWORD).await.unwrap();

        let mut recorded = None;
        for _ in 0..50 {
            recorded = repo.inner.find_by_username(&name).await.unwrap().unwrap().last_login_at;
            if recorded.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(recorded.is_some());
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::token_authority::TokenAuthority;
    use crate::domain::repository::PrincipalRepository;
    use crate::domain::value_object::{principal_role::PrincipalRole, username::Username};
    use crate::infra::memory::InMemoryPrincipalRepository;
    use crate::presentation::router::admin_auth_router;

    fn app(repo: &InMemoryPrincipalRepository) -> Router {
        let authority = TokenAuthority::new(Arc::new(repo.clone()), Arc::new(config()));
        admin_auth_router(Arc::new(authority))
    }

    fn login_request(username: &str, password: &str) -> Request<Body> {
        Request::post("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "username": username, "password": password }).to_string(),
            ))
            .unwrap()
    }

    fn me_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::get("/me");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_and_me() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let app = app(&repo);

        let response = app
            .clone()
            .oneshot(login_request("editor", EDITOR_PASSWORD))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["principal"]["username"], "editor");
        assert_eq!(body["principal"]["role"], "admin");
        assert!(body["principal"].get("passwordHash").is_none());
        assert!(body["expiresAt"].is_string());
        let token = body["token"].as_str().unwrap().to_string();

        let response = app.oneshot(me_request(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["subject"], "editor");
        assert_eq!(body["role"], "admin");
    }

    #[tokio::test]
    async fn test_login_failures_look_identical() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let app = app(&repo);

        let wrong_password = app
            .clone()
            .oneshot(login_request("editor", "wrong"))
            .await
            .unwrap();
        let unknown_user = app
            .oneshot(login_request("ghost", EDITOR_PASSWORD))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(wrong_password).await, json_body(unknown_user).await);
    }

    #[tokio::test]
    async fn test_me_rejections_are_generic() {
        let repo = InMemoryPrincipalRepository::new();
        seed(&repo, "editor", PrincipalRole::Admin).await;
        let app = app(&repo);

        let response = app
            .clone()
            .oneshot(login_request("editor", EDITOR_PASSWORD))
            .await
            .unwrap();
        let token = json_body(response).await["token"]
            .as_str()
            .unwrap()
            .to_string();
        repo.delete(&Username::new("editor").unwrap()).await.unwrap();

        let missing = app.clone().oneshot(me_request(None)).await.unwrap();
        let garbage = app.clone().oneshot(me_request(Some("garbage"))).await.unwrap();
        let revoked = app.oneshot(me_request(Some(&token))).await.unwrap();

        for response in [&missing, &garbage, &revoked] {
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        }

        let bodies = [
            json_body(missing).await,
            json_body(garbage).await,
            json_body(revoked).await,
        ];
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[1], bodies[2]);
        assert_eq!(bodies[0]["detail"], "Authentication required");
    }

    #[tokio::test]
    async fn test_store_down_is_503() {
        use std::sync::atomic::Ordering;

        let repo = FaultyRepository::default();
        seed(&repo.inner, "editor", PrincipalRole::Admin).await;
        repo.down.store(true, Ordering::SeqCst);

        let authority = TokenAuthority::new(Arc::new(repo.clone()), Arc::new(config()));
        let app = admin_auth_router(Arc::new(authority));

        let response = app.oneshot(login_request("editor", EDITOR_PASSWORD)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}

#[cfg(test)]
mod extractor_tests {
    use chrono::{Duration, Utc};

    use crate::domain::entity::{principal::Principal, session_claims::SessionClaims};
    use crate::domain::value_object::{
        principal_password::{NewPassword, PasswordHash},
        principal_role::PrincipalRole,
        username::Username,
    };
    use crate::presentation::middleware::AuthenticatedAdmin;
    use kernel::error::kind::ErrorKind;

    fn admin(role: PrincipalRole) -> AuthenticatedAdmin {
        let password = NewPassword::new(super::support::EDITOR_PASSWORD.to_string()).unwrap();
        let principal = Principal::new(
            Username::new("editor").unwrap(),
            PasswordHash::from_new(&password, None).unwrap(),
            role,
        );
        AuthenticatedAdmin(SessionClaims::issue(&principal, Utc::now(), Duration::minutes(5)).unwrap())
    }

    #[test]
    fn test_require_super_admin() {
        assert!(admin(PrincipalRole::SuperAdmin).require_super_admin().is_ok());

        let err = admin(PrincipalRole::Admin).require_super_admin().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }
}
