//! Authentication routes for sign-up, sign-in, session, and sign-out.
//!
//! Sign-up and sign-in sleep for a configurable simulated latency before
//! resolving, matching the feel of a hosted auth backend. The delay is a
//! demo affordance, not a functional requirement; tests set it to zero.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::routes::{internal_error, validation_response};
use wiremit_core::auth::{
    SignInInput, SignUpInput, User, hash_password, validate_sign_in, validate_sign_up,
    verify_password,
};
use wiremit_store::{SessionRepository, StoreError, UserRepository};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

async fn simulate_backend_latency(state: &AppState) {
    let ms = state.config.auth.simulated_latency_ms;
    if ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// POST /auth/register - Create an account and open a session.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<SignUpInput>,
) -> impl IntoResponse {
    if let Err(errors) = validate_sign_up(&payload) {
        return validation_response(&errors);
    }

    simulate_backend_latency(&state).await;

    let credential_hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "Failed to hash credential");
            return internal_error();
        }
    };

    let user = User::new(&payload.name, &payload.email);
    let user_repo = UserRepository::new(state.store.clone());

    let user = match user_repo.create(user, credential_hash).await {
        Ok(u) => u,
        Err(StoreError::DuplicateEmail) => {
            info!(email = %payload.email, "Sign-up attempt for existing email");
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "duplicate_email",
                    "message": "An account with this email already exists"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Store error during sign-up");
            return internal_error();
        }
    };

    if let Err(e) = SessionRepository::new(state.store.clone()).set(&user).await {
        error!(error = %e, "Failed to persist session after sign-up");
        return internal_error();
    }

    info!(user_id = %user.id, "User registered");
    (StatusCode::CREATED, Json(json!({ "user": user }))).into_response()
}

/// POST /auth/login - Authenticate and open a session.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<SignInInput>,
) -> impl IntoResponse {
    if let Err(errors) = validate_sign_in(&payload) {
        return validation_response(&errors);
    }

    simulate_backend_latency(&state).await;

    let user_repo = UserRepository::new(state.store.clone());

    // Unknown email and wrong password produce the same response; the
    // session stays unset on either.
    let invalid_credentials = || {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "invalid_credentials",
                "message": "Invalid email or password"
            })),
        )
            .into_response()
    };

    let user = match user_repo.find_by_email(&payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!(email = %payload.email, "Sign-in attempt for unknown email");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Store error during sign-in");
            return internal_error();
        }
    };

    let stored_hash = match user_repo.credential_hash(&user.email).await {
        Ok(Some(h)) => h,
        Ok(None) => {
            error!(user_id = %user.id, "User present without credential");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Store error during sign-in");
            return internal_error();
        }
    };

    match verify_password(&payload.password, &stored_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed sign-in attempt - wrong password");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Credential verification error");
            return internal_error();
        }
    }

    if let Err(e) = SessionRepository::new(state.store.clone()).set(&user).await {
        error!(error = %e, "Failed to persist session after sign-in");
        return internal_error();
    }

    info!(user_id = %user.id, "User signed in");
    (StatusCode::OK, Json(json!({ "user": user }))).into_response()
}

/// GET /auth/session - Return the persisted session, if any.
///
/// Used at startup to restore state without re-prompting for credentials.
async fn session(State(state): State<AppState>) -> impl IntoResponse {
    match SessionRepository::new(state.store.clone()).current().await {
        Ok(Some(user)) => (StatusCode::OK, Json(json!({ "user": user }))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "no_session",
                "message": "No active session"
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Store error reading session");
            internal_error()
        }
    }
}

/// POST /auth/logout - Clear the persisted session.
async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    match SessionRepository::new(state.store.clone()).clear().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Store error clearing session");
            internal_error()
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tower::ServiceExt;
    use wiremit_core::ledger::Ledger;
    use wiremit_shared::AppConfig;
    use wiremit_shared::config::{
        AuthConfig, LedgerConfig, RatesConfig, ServerConfig, StoreConfig,
    };
    use wiremit_store::Store;

    use crate::rates::RateService;
    use crate::{AppState, create_router};

    async fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("wiremit.json")).await.unwrap();
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            store: StoreConfig {
                path: dir.path().join("wiremit.json").display().to_string(),
            },
            rates: RatesConfig {
                provider_url: "http://127.0.0.1:9".to_string(),
                timeout_secs: 1,
                refresh_interval_secs: 300,
            },
            auth: AuthConfig {
                simulated_latency_ms: 0,
            },
            ledger: LedgerConfig {
                seed_demo_data: false,
                demo_seed: 42,
            },
        };
        let rates = Arc::new(RateService::new(&config.rates).unwrap());

        let state = AppState {
            store,
            ledger: Arc::new(RwLock::new(Ledger::new())),
            rates,
            config: Arc::new(config),
        };
        (state, dir)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    const ALICE: &str = r#"{"name":"Alice","email":"alice@example.com","password":"secret1"}"#;

    #[tokio::test]
    async fn test_register_creates_user_and_session() {
        let (state, _dir) = test_state().await;
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/auth/register", ALICE))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["user"]["email"], "alice@example.com");
        assert_eq!(json["user"]["name"], "Alice");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/auth/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["user"]["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let (state, _dir) = test_state().await;
        let app = create_router(state);

        let first = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/auth/register", ALICE))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        // Same address with different case still collides
        let second = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/register",
                r#"{"name":"Alice Again","email":"ALICE@example.com","password":"other99"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let json = body_json(second).await;
        assert_eq!(json["error"], "duplicate_email");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_fields() {
        let (state, _dir) = test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/register",
                r#"{"name":"A","email":"not-an-email","password":"short"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"], "validation_error");
        let fields: Vec<_> = json["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let (state, _dir) = test_state().await;
        let app = create_router(state);

        app.clone()
            .oneshot(json_request("POST", "/api/v1/auth/register", ALICE))
            .await
            .unwrap();

        let wrong = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                r#"{"email":"alice@example.com","password":"wrong99"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(wrong).await;
        assert_eq!(json["error"], "invalid_credentials");

        let right = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                r#"{"email":"alice@example.com","password":"secret1"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(right.status(), StatusCode::OK);
        let json = body_json(right).await;
        assert_eq!(json["user"]["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn test_login_unknown_email_matches_wrong_password() {
        let (state, _dir) = test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                r#"{"email":"nobody@example.com","password":"secret1"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "invalid_credentials");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (state, _dir) = test_state().await;
        let app = create_router(state);

        app.clone()
            .oneshot(json_request("POST", "/api/v1/auth/register", ALICE))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/auth/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "no_session");
    }
}
