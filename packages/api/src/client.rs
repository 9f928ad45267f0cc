//! # HTTP client for the classifieds backend
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the backend's conventions:
//!
//! - JSON in and out, plus `X-Requested-With: XMLHttpRequest` so the backend
//!   answers with JSON errors instead of redirects.
//! - The bearer token is read from the injected [`store::TokenStore`] on every
//!   request. Nothing global is mutated, so two clients with two stores never
//!   see each other's session.
//! - Optional CSRF bootstrap ([`CsrfMode::CookieBootstrap`]): the first
//!   mutating request fetches the cookie endpoint once and every mutating
//!   request then carries `X-XSRF-TOKEN`. A bootstrap that sets no token
//!   fails the mutating request.
//! - Non-2xx responses become an [`ApiError`]. A 401 also clears the stored
//!   token, so a revoked or expired token is never sent twice.
//!
//! Endpoint helpers (`login`, `register`, `logout`, `me`, `refresh`) sit on top
//! of the generic [`ApiClient::get`] / [`ApiClient::post`].

use std::sync::{Arc, Mutex};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::SharedTokenStore;

use crate::config::{ApiConfig, CsrfMode};
use crate::csrf;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginData, MeResponse, RegisterData, User};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
    tokens: SharedTokenStore,
    xsrf: Arc<Mutex<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("csrf", &self.config.csrf)
            .finish_non_exhaustive()
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        "X-Requested-With",
        HeaderValue::from_static("XMLHttpRequest"),
    );
    headers
}

fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: SharedTokenStore) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder().default_headers(default_headers());
        // The browser keeps cookies for wasm; natively the session cookie
        // from the CSRF bootstrap has to be replayed by reqwest.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout).cookie_store(true);
        let http = builder.build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            tokens,
            xsrf: Arc::new(Mutex::new(None)),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &SharedTokenStore {
        &self.tokens
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send::<()>(Method::GET, path, None).await?;
        decode(&body)
    }

    /// POST `body` (or nothing) to `path` and decode the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::POST, path, body).await?;
        decode(&body)
    }

    /// Send one request and return the raw body of a 2xx response.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let url = self.config.endpoint(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);

        if let Some(token) = self.tokens.load() {
            request = request.bearer_auth(token);
        }

        if is_mutating(&method) {
            if let Some(xsrf) = self.xsrf_token().await? {
                request = request.header(csrf::XSRF_HEADER, xsrf);
            }
        }

        // Cookie-based CSRF only works when the browser sends cookies cross-origin
        #[cfg(target_arch = "wasm32")]
        {
            if matches!(self.config.csrf, CsrfMode::CookieBootstrap { .. }) {
                request = request.fetch_credentials_include();
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            let err = ApiError::from(e);
            tracing::error!("{} {} failed: {}", method, url, err);
            err
        })?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("{} {} -> {}", method, url, status.as_u16());

        if status.is_success() {
            return Ok(text);
        }

        let err = ApiError::from_response(status.as_u16(), &text);
        match &err {
            ApiError::Unauthorized { .. } => {
                tracing::warn!("{} {} unauthorized, dropping stored token", method, url);
                if let Err(e) = self.tokens.clear() {
                    tracing::error!("failed to clear token after 401: {}", e);
                }
            }
            ApiError::Validation { errors, .. } => {
                tracing::debug!("{} {} rejected {} fields", method, url, errors.len());
            }
            ApiError::Server { .. } | ApiError::Status { .. } => {
                tracing::error!("{} {} -> {}: {}", method, url, status.as_u16(), err);
            }
            _ => tracing::warn!("{} {} -> {}", method, url, err),
        }
        Err(err)
    }

    /// The XSRF token to send with a mutating request, bootstrapping the
    /// cookie on first use.
    async fn xsrf_token(&self) -> Result<Option<String>, ApiError> {
        let CsrfMode::CookieBootstrap { cookie_url } = &self.config.csrf else {
            return Ok(None);
        };

        if let Some(token) = self.cached_xsrf() {
            return Ok(Some(token));
        }

        tracing::debug!("fetching CSRF cookie from {}", cookie_url);
        let request = self.http.get(cookie_url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        let response = request.send().await?;

        let status = response.status();
        #[cfg(not(target_arch = "wasm32"))]
        let token = csrf::from_set_cookie(
            response
                .headers()
                .get_all(reqwest::header::SET_COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok()),
        );
        #[cfg(target_arch = "wasm32")]
        let token = csrf::from_document();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        let Some(token) = token else {
            tracing::error!("CSRF bootstrap returned no {} cookie", csrf::XSRF_COOKIE);
            return Err(ApiError::MissingCsrfToken);
        };
        if let Ok(mut slot) = self.xsrf.lock() {
            *slot = Some(token.clone());
        }
        Ok(Some(token))
    }

    fn cached_xsrf(&self) -> Option<String> {
        self.xsrf.lock().ok()?.clone()
    }

    pub async fn login(&self, data: &LoginData) -> Result<AuthResponse, ApiError> {
        self.post("/login", Some(data)).await
    }

    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        self.post("/register", Some(data)).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send::<()>(Method::POST, "/logout", None).await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse = self.get("/me").await?;
        Ok(response.into_user())
    }

    pub async fn refresh(&self) -> Result<AuthResponse, ApiError> {
        self.post::<(), _>("/refresh", None).await
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("undecodable response body: {}", e);
        ApiError::Decode(e.to_string())
    })
}
