//! # User model
//!
//! [`User`] is the account record the backend returns from `/me`, `/login`,
//! `/register` and `/refresh`. Only `id`, `name` and `email` are mandatory;
//! everything else is tolerated missing so older backend builds still decode.
//!
//! [`ProfileForm`] and [`PasswordChange`] are the two editable forms on the
//! profile page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role descriptor attached to a user (e.g. `user`, `moderator`, `admin`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub phone_verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub role: Option<Role>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn is_email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }

    pub fn is_phone_verified(&self) -> bool {
        self.phone.is_some() && self.phone_verified_at.is_some()
    }

    pub fn role_label(&self) -> Option<&str> {
        let role = self.role.as_ref()?;
        if role.display_name.is_empty() {
            Some(&role.name)
        } else {
            Some(&role.display_name)
        }
    }
}

/// Editable profile details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }
}

/// Password change request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_user() {
        let json = r#"{
            "id": 7,
            "name": "Anna Liepa",
            "email": "anna@example.lv",
            "phone": "+37120000000",
            "is_active": true,
            "email_verified_at": "2025-01-06T09:45:00.000000Z",
            "phone_verified_at": null,
            "role": {"id": 1, "name": "user", "display_name": "Lietotājs"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_email_verified());
        assert!(!user.is_phone_verified());
        assert_eq!(user.role_label(), Some("Lietotājs"));
    }

    #[test]
    fn test_decode_minimal_user() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "name": "", "email": "x@y.lv"}"#).unwrap();
        assert!(user.is_active);
        assert!(user.role.is_none());
        assert_eq!(user.display_name(), "x@y.lv");

        let form = ProfileForm::from_user(&user);
        assert_eq!(form.phone, "");
    }
}
