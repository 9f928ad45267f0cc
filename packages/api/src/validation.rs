//! # Form validation shared by the pages
//!
//! Each form has one `validate_*` function returning [`FieldErrors`], keyed by
//! the same field names the backend uses, so client-side and server-side (422)
//! errors can be shown through the same code path. Messages are in Latvian,
//! matching the rest of the interface.
//!
//! | Function | Form |
//! |----------|------|
//! | [`validate_login`] | login page |
//! | [`validate_register`] | registration page |
//! | [`validate_advert`] | "create ad" page |
//! | [`validate_profile`] | profile details tab |
//! | [`validate_password_change`] | profile password tab |

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{AdvertForm, LoginData, PasswordChange, ProfileForm, RegisterData};

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_PHONE_LEN: usize = 20;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_IMAGES: usize = 10;
pub const MAX_PRICE: f64 = 999_999_999.99;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("valid phone regex"));

/// Field name → messages. Same shape as the `errors` object of a 422 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .get(field)
            .map(Vec::as_slice)
            .filter(|messages| !messages.is_empty())
    }

    /// The message a form shows under `field`.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)?.first().map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Drop the errors of one field, e.g. when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Replace the messages of `field` with those `fresh` has for it.
    /// Used to validate a single field on blur.
    pub fn revalidate(&mut self, field: &str, fresh: &FieldErrors) {
        match fresh.get(field) {
            Some(messages) => {
                self.0.insert(field.to_string(), messages.to_vec());
            }
            None => self.clear(field),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.0.values().filter(|m| !m.is_empty()).count()
    }

    /// Overlay `other` on top of `self`; a field present in `other` replaces
    /// this field's messages.
    pub fn merge(&mut self, other: &FieldErrors) {
        for (field, messages) in &other.0 {
            if !messages.is_empty() {
                self.0.insert(field.clone(), messages.clone());
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (f.as_str(), m.as_slice()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn check_name(errors: &mut FieldErrors, name: &str) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.add("name", "Vārds ir obligāts");
    } else if char_len(trimmed) < 2 {
        errors.add("name", "Vārdam jābūt vismaz 2 simboli garam");
    } else if char_len(name) > MAX_NAME_LEN {
        errors.add("name", "Vārds nedrīkst būt garāks par 255 simboliem");
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.add("email", "E-pasta adrese ir obligāta");
    } else if !is_valid_email(email) {
        errors.add("email", "E-pasta adrese nav derīga");
    } else if char_len(email) > MAX_EMAIL_LEN {
        errors.add("email", "E-pasta adrese nedrīkst būt garāka par 255 simboliem");
    }
}

fn check_phone(errors: &mut FieldErrors, field: &str, phone: &str) {
    if phone.is_empty() {
        return;
    }
    if !PHONE_RE.is_match(phone) {
        errors.add(field, "Telefona numura formāts nav pareizs");
    } else if char_len(phone) > MAX_PHONE_LEN {
        errors.add(field, "Telefona numurs nedrīkst būt garāks par 20 simboliem");
    }
}

pub fn validate_login(data: &LoginData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &data.email);
    if data.password.is_empty() {
        errors.add("password", "Parole ir obligāta");
    }
    errors
}

pub fn validate_register(data: &RegisterData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_name(&mut errors, &data.name);
    check_email(&mut errors, &data.email);
    check_phone(&mut errors, "phone", data.phone.as_deref().unwrap_or_default());

    let password = &data.password;
    if password.is_empty() {
        errors.add("password", "Parole ir obligāta");
    } else if char_len(password) < MIN_PASSWORD_LEN {
        errors.add("password", "Parolei jābūt vismaz 8 simboli garai");
    } else if !(password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit()))
    {
        errors.add("password", "Parolei jāsatur gan burti, gan cipari");
    }

    if data.password_confirmation.is_empty() {
        errors.add("password_confirmation", "Paroles apstiprinājums ir obligāts");
    } else if data.password_confirmation != data.password {
        errors.add("password_confirmation", "Paroles nesakrīt");
    }

    if !data.terms_accepted {
        errors.add("terms_accepted", "Jāpiekrīt lietošanas noteikumiem");
    }
    errors
}

pub fn validate_advert(form: &AdvertForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.title.trim().is_empty() {
        errors.add("title", "Nosaukums ir obligāts");
    } else if char_len(&form.title) > MAX_TITLE_LEN {
        errors.add("title", "Nosaukums nedrīkst būt garāks par 100 simboliem");
    }

    if form.description.trim().is_empty() {
        errors.add("description", "Apraksts ir obligāts");
    } else if char_len(&form.description) > MAX_DESCRIPTION_LEN {
        errors.add("description", "Apraksts nedrīkst būt garāks par 2000 simboliem");
    }

    if form.category_id.is_none() {
        errors.add("category_id", "Kategorija ir obligāta");
    }

    if form.location.trim().is_empty() {
        errors.add("location", "Atrašanās vieta ir obligāta");
    }

    match form.parsed_price() {
        Err(_) => errors.add("price", "Cenai jābūt pozitīvam skaitlim"),
        Ok(Some(price)) if price > MAX_PRICE => {
            errors.add("price", "Cena nedrīkst pārsniegt 999 999 999,99")
        }
        Ok(_) => {}
    }

    check_phone(&mut errors, "contact_phone", form.contact_phone.trim());
    if !form.contact_email.trim().is_empty() && !is_valid_email(form.contact_email.trim()) {
        errors.add("contact_email", "E-pasta adrese nav derīga");
    }

    if form.images.len() > MAX_IMAGES {
        errors.add("images", format!("Maksimums {MAX_IMAGES} attēli"));
    }
    errors
}

pub fn validate_profile(form: &ProfileForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_name(&mut errors, &form.name);
    check_email(&mut errors, &form.email);
    check_phone(&mut errors, "phone", &form.phone);
    errors
}

pub fn validate_password_change(form: &PasswordChange) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.current_password.is_empty() {
        errors.add("current_password", "Pašreizējā parole ir obligāta");
    }
    if char_len(&form.password) < MIN_PASSWORD_LEN {
        errors.add("password", "Parolei jābūt vismaz 8 simbolus garai");
    }
    if form.password != form.password_confirmation {
        errors.add("password_confirmation", "Paroles nesakrīt");
    }
    errors
}
