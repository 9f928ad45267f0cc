//! Request and response payloads of the authentication endpoints.
//!
//! Backend builds disagree on where the token sits in a login/register
//! response, so [`AuthResponse`] accepts all three shapes:
//!
//! ```text
//! {"data": {...user}, "token": "..."}   nested
//! {"user": {...user}, "token": "..."}   wrapped
//! {"token": "...", ...user}             flat
//! ```

use serde::{Deserialize, Serialize};

use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    pub password_confirmation: String,
    pub terms_accepted: bool,
}

impl RegisterData {
    /// Trim text fields and drop an empty phone before sending.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            ..self.clone()
        }
    }
}

/// Successful login, register or refresh.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "AuthResponseWire")]
pub struct AuthResponse {
    pub user: User,
    pub token: Option<String>,
}

impl AuthResponse {
    pub fn into_parts(self) -> (User, Option<String>) {
        (self.user, self.token.filter(|t| !t.is_empty()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthResponseWire {
    Nested {
        data: User,
        #[serde(default)]
        token: Option<String>,
    },
    Wrapped {
        user: User,
        #[serde(default)]
        token: Option<String>,
    },
    Flat {
        #[serde(default)]
        token: Option<String>,
        #[serde(flatten)]
        user: User,
    },
}

impl From<AuthResponseWire> for AuthResponse {
    fn from(wire: AuthResponseWire) -> Self {
        match wire {
            AuthResponseWire::Nested { data, token } => Self { user: data, token },
            AuthResponseWire::Wrapped { user, token } => Self { user, token },
            AuthResponseWire::Flat { token, user } => Self { user, token },
        }
    }
}

/// Body of `GET /me`: either `{"data": user}` or the bare user.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum MeResponse {
    Wrapped { data: User },
    Bare(User),
}

impl MeResponse {
    pub(crate) fn into_user(self) -> User {
        match self {
            MeResponse::Wrapped { data } => data,
            MeResponse::Bare(user) => user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_token() {
        let json = r#"{"data": {"id": 1, "name": "Anna", "email": "a@b.lv"}, "token": "1|abc"}"#;
        let (user, token) = serde_json::from_str::<AuthResponse>(json)
            .unwrap()
            .into_parts();
        assert_eq!(user.name, "Anna");
        assert_eq!(token.as_deref(), Some("1|abc"));
    }

    #[test]
    fn test_wrapped_token() {
        let json = r#"{"user": {"id": 2, "name": "Ivars", "email": "i@b.lv"}, "token": "2|xyz"}"#;
        let (user, token) = serde_json::from_str::<AuthResponse>(json)
            .unwrap()
            .into_parts();
        assert_eq!(user.id, 2);
        assert_eq!(token.as_deref(), Some("2|xyz"));
    }

    #[test]
    fn test_flat_token() {
        let json = r#"{"id": 3, "name": "Līga", "email": "l@b.lv", "token": "3|flat"}"#;
        let (user, token) = serde_json::from_str::<AuthResponse>(json)
            .unwrap()
            .into_parts();
        assert_eq!(user.email, "l@b.lv");
        assert_eq!(token.as_deref(), Some("3|flat"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        let json = r#"{"data": {"id": 1, "name": "Anna", "email": "a@b.lv"}, "token": ""}"#;
        let (_, token) = serde_json::from_str::<AuthResponse>(json)
            .unwrap()
            .into_parts();
        assert!(token.is_none());

        let json = r#"{"data": {"id": 1, "name": "Anna", "email": "a@b.lv"}}"#;
        assert!(serde_json::from_str::<AuthResponse>(json)
            .unwrap()
            .token
            .is_none());
    }

    #[test]
    fn test_me_response_shapes() {
        let wrapped: MeResponse =
            serde_json::from_str(r#"{"data": {"id": 1, "name": "A", "email": "a@b.lv"}}"#)
                .unwrap();
        assert_eq!(wrapped.into_user().id, 1);

        let bare: MeResponse =
            serde_json::from_str(r#"{"id": 5, "name": "B", "email": "b@b.lv"}"#).unwrap();
        assert_eq!(bare.into_user().id, 5);
    }

    #[test]
    fn test_register_payload() {
        let data = RegisterData {
            name: "  Anna ".to_string(),
            email: " a@b.lv ".to_string(),
            phone: Some("   ".to_string()),
            password: "parole123".to_string(),
            password_confirmation: "parole123".to_string(),
            terms_accepted: true,
        }
        .normalized();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["name"], "Anna");
        assert_eq!(json["email"], "a@b.lv");
        assert!(json.get("phone").is_none());
        assert_eq!(json["terms_accepted"], true);
    }
}
