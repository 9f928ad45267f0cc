//! Backend connection settings.
//!
//! Native builds read a `.env` file (via `dotenvy`) and the process
//! environment at startup. Browser builds cannot see the environment, so the
//! same variables are baked in at compile time.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TIRGUS_API_URL` | `http://localhost:8000/api/v1` |
//! | `TIRGUS_API_TIMEOUT_SECS` | `10` |
//! | `TIRGUS_CSRF_COOKIE_URL` | unset (no CSRF bootstrap) |

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether mutating requests need a CSRF cookie first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CsrfMode {
    /// Token-authenticated API, no CSRF protection.
    #[default]
    Disabled,
    /// Fetch `cookie_url` once before the first mutating request and echo the
    /// `XSRF-TOKEN` cookie back as `X-XSRF-TOKEN`.
    CookieBootstrap { cookie_url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub csrf: CsrfMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            csrf: CsrfMode::Disabled,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_csrf_cookie(mut self, cookie_url: impl Into<String>) -> Self {
        self.csrf = CsrfMode::CookieBootstrap {
            cookie_url: cookie_url.into(),
        };
        self
    }

    /// Build the config from `TIRGUS_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            Self::from_lookup(|key| std::env::var(key).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|key| match key {
                "TIRGUS_API_URL" => option_env!("TIRGUS_API_URL").map(str::to_string),
                "TIRGUS_API_TIMEOUT_SECS" => {
                    option_env!("TIRGUS_API_TIMEOUT_SECS").map(str::to_string)
                }
                "TIRGUS_CSRF_COOKIE_URL" => {
                    option_env!("TIRGUS_CSRF_COOKIE_URL").map(str::to_string)
                }
                _ => None,
            })
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("TIRGUS_API_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup("TIRGUS_API_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("ignoring invalid TIRGUS_API_TIMEOUT_SECS={raw:?}"),
            }
        }

        if let Some(cookie_url) = lookup("TIRGUS_CSRF_COOKIE_URL").filter(|u| !u.trim().is_empty()) {
            config.csrf = CsrfMode::CookieBootstrap {
                cookie_url: cookie_url.trim().to_string(),
            };
        }

        config
    }

    /// Absolute URL for an API path such as `"/login"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
