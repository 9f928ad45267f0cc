//! Client and session against an in-process fake backend.

#![cfg(not(target_arch = "wasm32"))]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiConfig, ApiError, LoginData, RegisterData, Session, SessionState};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{MemoryTokenStore, TokenStore};

const XSRF_VALUE: &str = "tok=abc";
const SESSION_COOKIE: &str = "laravel_session=s1";

#[derive(Debug, Clone)]
struct Seen {
    method: String,
    path: String,
    authorization: Option<String>,
    xsrf: Option<String>,
    cookie: Option<String>,
    requested_with: Option<String>,
}

#[derive(Clone, Default)]
struct Backend {
    tokens: Arc<Mutex<HashSet<String>>>,
    issued: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<Seen>>>,
    csrf_hits: Arc<AtomicUsize>,
    require_csrf: bool,
    csrf_without_token: bool,
    logout_fails: bool,
}

impl Backend {
    fn issue(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("token-{n}");
        self.tokens.lock().unwrap().insert(token.clone());
        token
    }

    fn accept(&self, token: &str) {
        self.tokens.lock().unwrap().insert(token.to_string());
    }

    fn revoke_all(&self) {
        self.tokens.lock().unwrap().clear();
    }

    fn is_valid(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().contains(token)
    }

    fn authorized(&self, headers: &HeaderMap) -> Option<String> {
        let token = headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?
            .to_string();
        self.is_valid(&token).then_some(token)
    }

    fn seen(&self, path: &str) -> Vec<Seen> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.path == path)
            .cloned()
            .collect()
    }
}

fn user() -> Value {
    json!({
        "id": 7,
        "name": "Anna Bērziņa",
        "email": "anna@example.lv",
        "phone": "+371 20000000",
        "email_verified_at": "2025-01-02T10:00:00Z",
        "role": {"id": 1, "name": "user", "display_name": "Lietotājs"}
    })
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Unauthenticated."})),
    )
        .into_response()
}

async fn record(State(backend): State<Backend>, req: Request, next: Next) -> Response {
    // The header closure borrows `req`, so it must be gone before `next.run`.
    let seen = {
        let header_value = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Seen {
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
            authorization: header_value("authorization"),
            xsrf: header_value("x-xsrf-token"),
            cookie: header_value("cookie"),
            requested_with: header_value("x-requested-with"),
        }
    };
    let has_session_cookie = seen
        .cookie
        .as_deref()
        .is_some_and(|c| c.split("; ").any(|pair| pair == SESSION_COOKIE));
    let csrf_ok = seen.xsrf.as_deref() == Some(XSRF_VALUE) && has_session_cookie;
    let mutating = req.method() == Method::POST;
    backend.seen.lock().unwrap().push(seen);

    if backend.require_csrf && mutating && !csrf_ok {
        return (
            StatusCode::from_u16(419).unwrap(),
            Json(json!({"message": "CSRF token mismatch."})),
        )
            .into_response();
    }
    next.run(req).await
}

async fn csrf_cookie(State(backend): State<Backend>) -> Response {
    backend.csrf_hits.fetch_add(1, Ordering::SeqCst);
    if backend.csrf_without_token {
        return (
            StatusCode::NO_CONTENT,
            [(header::SET_COOKIE, "laravel_session=s1; Path=/; HttpOnly")],
        )
            .into_response();
    }
    (
        StatusCode::NO_CONTENT,
        AppendHeaders([
            (header::SET_COOKIE, "laravel_session=s1; Path=/; HttpOnly"),
            (header::SET_COOKIE, "XSRF-TOKEN=tok%3Dabc; Path=/; SameSite=Lax"),
        ]),
    )
        .into_response()
}

async fn login(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match (email, password) {
        ("", _) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"email": ["E-pasts ir obligāts"]}
            })),
        )
            .into_response(),
        ("anna@example.lv", "parole123") => {
            Json(json!({"data": user(), "token": backend.issue()})).into_response()
        }
        ("notoken@example.lv", _) => Json(json!({"data": user()})).into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Nepareizs e-pasts vai parole"})),
        )
            .into_response(),
    }
}

async fn register(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    if body["email"] == "taken@example.lv" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"email": ["Šis e-pasts jau ir reģistrēts"]}
            })),
        )
            .into_response();
    }
    let mut flat = user();
    flat["name"] = body["name"].clone();
    flat["email"] = body["email"].clone();
    flat["token"] = json!(backend.issue());
    Json(flat).into_response()
}

async fn me(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    match backend.authorized(&headers) {
        Some(_) => Json(json!({"data": user()})).into_response(),
        None => unauthenticated(),
    }
}

async fn logout(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    if backend.logout_fails {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "boom"})),
        )
            .into_response();
    }
    match backend.authorized(&headers) {
        Some(token) => {
            backend.tokens.lock().unwrap().remove(&token);
            StatusCode::NO_CONTENT.into_response()
        }
        None => unauthenticated(),
    }
}

async fn refresh(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    match backend.authorized(&headers) {
        Some(old) => {
            backend.tokens.lock().unwrap().remove(&old);
            Json(json!({"data": user(), "token": backend.issue()})).into_response()
        }
        None => unauthenticated(),
    }
}

/// Serve `backend` on an ephemeral port and return its origin.
async fn spawn(backend: Backend) -> String {
    let app = Router::new()
        .route("/sanctum/csrf-cookie", get(csrf_cookie))
        .route("/api/v1/login", post(login))
        .route("/api/v1/register", post(register))
        .route("/api/v1/me", get(me))
        .route("/api/v1/logout", post(logout))
        .route("/api/v1/refresh", post(refresh))
        .layer(middleware::from_fn_with_state(backend.clone(), record))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn session_for(backend: &Backend, store: MemoryTokenStore) -> Session {
    let origin = spawn(backend.clone()).await;
    let config = ApiConfig::new(format!("{origin}/api/v1"));
    Session::new(ApiClient::new(config, Arc::new(store)).unwrap())
}

fn anna() -> LoginData {
    LoginData {
        email: "anna@example.lv".into(),
        password: "parole123".into(),
        remember: false,
    }
}

#[tokio::test]
async fn test_login_persists_token_and_authorizes_requests() {
    let backend = Backend::default();
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;

    let user = session.login(&anna()).await.unwrap();
    assert_eq!(user.name, "Anna Bērziņa");
    assert!(user.is_email_verified());
    assert_eq!(store.load().as_deref(), Some("token-1"));
    assert!(session.is_authenticated());

    let me = session.client().me().await.unwrap();
    assert_eq!(me.id, 7);

    let login = &backend.seen("/api/v1/login")[0];
    assert_eq!(login.method, "POST");
    assert_eq!(login.authorization, None);
    assert_eq!(login.requested_with.as_deref(), Some("XMLHttpRequest"));

    let me = &backend.seen("/api/v1/me")[0];
    assert_eq!(me.authorization.as_deref(), Some("Bearer token-1"));
}

#[tokio::test]
async fn test_register_accepts_flat_token_shape() {
    let backend = Backend::default();
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;

    let data = RegisterData {
        name: "  Jānis Ozols ".into(),
        email: "janis@example.lv".into(),
        phone: Some(String::new()),
        password: "parole123".into(),
        password_confirmation: "parole123".into(),
        terms_accepted: true,
    };
    let user = session.register(&data).await.unwrap();
    assert_eq!(user.name, "Jānis Ozols");
    assert_eq!(user.email, "janis@example.lv");
    assert_eq!(store.load().as_deref(), Some("token-1"));
    assert_eq!(session.user(), Some(user));
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let backend = Backend::default();
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;

    let data = LoginData {
        email: "notoken@example.lv".into(),
        ..anna()
    };
    let err = session.login(&data).await.unwrap_err();
    assert_eq!(err, ApiError::MissingToken);
    assert!(!store.has_token());
    assert_eq!(session.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let backend = Backend::default();
    let session = session_for(&backend, MemoryTokenStore::new()).await;

    let data = LoginData {
        password: "nepareizi".into(),
        ..anna()
    };
    let err = session.login(&data).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Nepareizs e-pasts vai parole");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_validation_errors_are_passed_through() {
    let backend = Backend::default();
    let session = session_for(&backend, MemoryTokenStore::new()).await;

    let data = RegisterData {
        name: "Taken".into(),
        email: "taken@example.lv".into(),
        password: "parole123".into(),
        password_confirmation: "parole123".into(),
        terms_accepted: true,
        ..Default::default()
    };
    let err = session.register(&data).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));
    assert_eq!(
        err.field_errors().first("email"),
        Some("Šis e-pasts jau ir reģistrēts")
    );
    assert_eq!(err.user_message(), "The given data was invalid.");
}

#[tokio::test]
async fn test_restore_with_valid_token() {
    let backend = Backend::default();
    backend.accept("saved");
    let session = session_for(&backend, MemoryTokenStore::with_token("saved")).await;

    assert!(session.is_loading());
    let state = session.restore().await;
    assert!(matches!(state, SessionState::Authenticated(ref u) if u.id == 7));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_restore_with_revoked_token_clears_store() {
    let backend = Backend::default();
    let store = MemoryTokenStore::with_token("revoked");
    let session = session_for(&backend, store.clone()).await;

    assert_eq!(session.restore().await, SessionState::Anonymous);
    assert!(!store.has_token());
}

#[tokio::test]
async fn test_restore_without_token_makes_no_request() {
    let backend = Backend::default();
    let session = session_for(&backend, MemoryTokenStore::new()).await;

    assert_eq!(session.restore().await, SessionState::Anonymous);
    assert!(backend.seen("/api/v1/me").is_empty());
}

#[tokio::test]
async fn test_unauthorized_response_ends_session() {
    let backend = Backend::default();
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;
    session.login(&anna()).await.unwrap();

    backend.revoke_all();
    let err = session.client().me().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!store.has_token());
    assert!(!session.is_authenticated());

    // The cleared token is not sent again.
    let _ = session.client().me().await;
    let attempts = backend.seen("/api/v1/me");
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[1].authorization, None);
}

#[tokio::test]
async fn test_logout_revokes_and_clears() {
    let backend = Backend::default();
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;
    session.login(&anna()).await.unwrap();

    session.logout().await;
    assert!(!store.has_token());
    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(!backend.is_valid("token-1"));
    assert_eq!(
        backend.seen("/api/v1/logout")[0].authorization.as_deref(),
        Some("Bearer token-1")
    );
}

#[tokio::test]
async fn test_logout_clears_even_when_backend_fails() {
    let backend = Backend {
        logout_fails: true,
        ..Default::default()
    };
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;
    session.login(&anna()).await.unwrap();

    session.logout().await;
    assert!(!store.has_token());
    assert!(session.user().is_none());
    assert_eq!(backend.seen("/api/v1/logout").len(), 1);
}

#[tokio::test]
async fn test_refresh_rotates_token() {
    let backend = Backend::default();
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;
    session.login(&anna()).await.unwrap();

    session.refresh().await.unwrap();
    assert_eq!(store.load().as_deref(), Some("token-2"));
    assert!(!backend.is_valid("token-1"));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_csrf_bootstrap_runs_once_before_mutating_requests() {
    let backend = Backend {
        require_csrf: true,
        ..Default::default()
    };
    let origin = spawn(backend.clone()).await;
    let config = ApiConfig::new(format!("{origin}/api/v1"))
        .with_csrf_cookie(format!("{origin}/sanctum/csrf-cookie"));
    let store = MemoryTokenStore::new();
    let session = Session::new(ApiClient::new(config, Arc::new(store.clone())).unwrap());

    // Safe requests never bootstrap.
    let _ = session.client().me().await;
    assert_eq!(backend.csrf_hits.load(Ordering::SeqCst), 0);

    session.login(&anna()).await.unwrap();
    session.refresh().await.unwrap();
    assert_eq!(backend.csrf_hits.load(Ordering::SeqCst), 1);

    for request in backend
        .seen("/api/v1/login")
        .iter()
        .chain(&backend.seen("/api/v1/refresh"))
    {
        assert_eq!(request.xsrf.as_deref(), Some(XSRF_VALUE));
        let cookie = request.cookie.as_deref().unwrap_or_default();
        assert!(cookie.contains(SESSION_COOKIE), "cookie header: {cookie:?}");
    }
    assert_eq!(backend.seen("/api/v1/me")[0].xsrf, None);
}

#[tokio::test]
async fn test_csrf_bootstrap_without_token_fails_mutating_call() {
    let backend = Backend {
        require_csrf: true,
        csrf_without_token: true,
        ..Default::default()
    };
    let origin = spawn(backend.clone()).await;
    let config = ApiConfig::new(format!("{origin}/api/v1"))
        .with_csrf_cookie(format!("{origin}/sanctum/csrf-cookie"));
    let store = MemoryTokenStore::new();
    let session = Session::new(ApiClient::new(config, Arc::new(store.clone())).unwrap());

    let err = session.login(&anna()).await.unwrap_err();
    assert_eq!(err, ApiError::MissingCsrfToken);
    assert!(backend.seen("/api/v1/login").is_empty());
    assert!(!store.has_token());

    // Nothing was cached, so the next attempt bootstraps again.
    let _ = session.login(&anna()).await;
    assert_eq!(backend.csrf_hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_missing_csrf_token_surfaces_as_status_error() {
    let backend = Backend {
        require_csrf: true,
        ..Default::default()
    };
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;

    let err = session.login(&anna()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 419,
            message: Some("CSRF token mismatch.".into())
        }
    );
    assert!(!store.has_token());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::new(format!("http://{addr}/api/v1"));
    let client = ApiClient::new(config, Arc::new(MemoryTokenStore::new())).unwrap();
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(
        err.user_message(),
        "Savienojuma kļūda. Pārbaudiet interneta savienojumu"
    );
}

#[tokio::test]
async fn test_reload_updates_user() {
    let backend = Backend::default();
    let store = MemoryTokenStore::new();
    let session = session_for(&backend, store.clone()).await;
    session.login(&anna()).await.unwrap();

    let user = session.reload().await.unwrap();
    assert_eq!(session.user(), Some(user));

    backend.revoke_all();
    assert!(session.reload().await.unwrap_err().is_unauthorized());
    assert_eq!(session.state(), SessionState::Anonymous);
}
