//! # Client-side error classification
//!
//! Every failed backend call ends up as one [`ApiError`]. HTTP statuses are
//! classified once, in [`ApiError::from_response`], instead of in each page:
//!
//! | Status | Variant |
//! |--------|---------|
//! | 401 | [`ApiError::Unauthorized`] (the client also drops the stored token) |
//! | 403 | [`ApiError::Forbidden`] |
//! | 404 | [`ApiError::NotFound`] |
//! | 422 | [`ApiError::Validation`] with the per-field messages |
//! | 429 | [`ApiError::TooManyRequests`] |
//! | 500 | [`ApiError::Server`] |
//! | other | [`ApiError::Status`] |
//!
//! `Display` is for logs. Pages show [`ApiError::user_message`], which is
//! localised and prefers the backend's own `message` when it sent one.

use serde::Deserialize;
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    #[error("forbidden")]
    Forbidden { message: Option<String> },
    #[error("not found")]
    NotFound { message: Option<String> },
    #[error("validation failed ({} fields)", .errors.len())]
    Validation {
        message: Option<String>,
        errors: FieldErrors,
    },
    #[error("too many requests")]
    TooManyRequests,
    #[error("server error")]
    Server { message: Option<String> },
    #[error("unexpected HTTP status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("response could not be decoded: {0}")]
    Decode(String),
    #[error("authentication response did not include a token")]
    MissingToken,
    #[error("CSRF bootstrap did not set an XSRF-TOKEN cookie")]
    MissingCsrfToken,
    #[error("token storage failed: {0}")]
    Storage(String),
}

/// Error body shape the backend sends (`{"message": ..., "errors": {...}}`).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: FieldErrors,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let ErrorBody { message, errors } = serde_json::from_str(body).unwrap_or_default();
        let message = message.filter(|m| !m.trim().is_empty());

        match status {
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden { message },
            404 => ApiError::NotFound { message },
            422 => ApiError::Validation { message, errors },
            429 => ApiError::TooManyRequests,
            500 => ApiError::Server { message },
            _ => ApiError::Status { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Per-field messages from a 422 response; empty for anything else.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Validation { errors, .. } => errors.clone(),
            _ => FieldErrors::default(),
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        fn or(message: &Option<String>, fallback: &str) -> String {
            message.clone().unwrap_or_else(|| fallback.to_string())
        }

        match self {
            ApiError::Timeout => "Pieprasījums pārsniedza laika limitu".to_string(),
            ApiError::Network(_) => {
                "Savienojuma kļūda. Pārbaudiet interneta savienojumu".to_string()
            }
            ApiError::Unauthorized { message } => or(message, "Nepieciešama autorizācija"),
            ApiError::Forbidden { message } => or(message, "Jums nav atļaujas veikt šo darbību"),
            ApiError::NotFound { message } => or(message, "Resurss nav atrasts"),
            ApiError::Validation { message, .. } => or(message, "Pārbaudiet ievadītos datus"),
            ApiError::TooManyRequests => {
                "Pārāk daudz pieprasījumu. Lūdzu, mēģiniet vēlāk".to_string()
            }
            ApiError::Server { message } => or(message, "Servera kļūda. Lūdzu, mēģiniet vēlāk"),
            ApiError::Status { message, .. } => or(message, "Nezināma kļūda"),
            ApiError::Decode(_)
            | ApiError::MissingToken
            | ApiError::MissingCsrfToken
            | ApiError::Storage(_) => {
                "Nezināma kļūda".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<store::StoreError> for ApiError {
    fn from(e: store::StoreError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(matches!(
            ApiError::from_response(403, "{}"),
            ApiError::Forbidden { message: None }
        ));
        assert!(matches!(
            ApiError::from_response(404, ""),
            ApiError::NotFound { .. }
        ));
        assert_eq!(ApiError::from_response(429, ""), ApiError::TooManyRequests);
        assert!(matches!(
            ApiError::from_response(500, "<html>oops</html>"),
            ApiError::Server { message: None }
        ));
        assert_eq!(
            ApiError::from_response(418, r#"{"message":"teapot"}"#),
            ApiError::Status {
                status: 418,
                message: Some("teapot".to_string())
            }
        );
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email has already been taken."],
                "password": ["The password must be at least 8 characters.", "Too weak."]
            }
        }"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.user_message(), "The given data was invalid.");

        let fields = err.field_errors();
        assert_eq!(fields.first("email"), Some("The email has already been taken."));
        assert_eq!(fields.get("password").map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_field_errors_empty_for_other_errors() {
        assert!(ApiError::Timeout.field_errors().is_empty());
        assert!(ApiError::from_response(403, r#"{"errors":{"x":["y"]}}"#)
            .field_errors()
            .is_empty());
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ApiError::from_response(403, r#"{"message":"Konts ir bloķēts"}"#);
        assert_eq!(err.user_message(), "Konts ir bloķēts");

        let err = ApiError::from_response(403, r#"{"message":"   "}"#);
        assert_eq!(err.user_message(), "Jums nav atļaujas veikt šo darbību");

        assert_eq!(
            ApiError::from_response(502, "").user_message(),
            "Nezināma kļūda"
        );
        assert_eq!(
            ApiError::Timeout.user_message(),
            "Pieprasījums pārsniedza laika limitu"
        );
    }
}
