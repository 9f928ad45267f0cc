//! # API crate: client side of the Tirgus classifieds backend
//!
//! Everything the front end needs to talk to the backend and to reason about
//! its data, with no UI code.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL, timeout and CSRF mode, loaded from the environment |
//! | [`client`] | `reqwest` client: JSON headers, per-request bearer token, CSRF bootstrap, 401 handling |
//! | [`session`] | Login / register / logout / restore lifecycle on top of the client |
//! | [`error`] | [`ApiError`] and the Latvian messages shown to users |
//! | [`models`] | Users, auth payloads, adverts and categories |
//! | [`validation`] | Client-side form checks producing [`FieldErrors`] |
//! | [`listings`] | Filtering, sorting and statistics for "My ads" |
//! | [`catalog`] | Hard-coded categories and adverts |
//!
//! The bearer token lives in a [`store::TokenStore`] handed to [`ApiClient::new`];
//! the session and the client never keep a copy of their own.

pub mod catalog;
pub mod client;
pub mod config;
pub mod csrf;
pub mod error;
pub mod listings;
pub mod models;
pub mod session;
pub mod validation;

pub use client::ApiClient;
pub use config::{ApiConfig, CsrfMode};
pub use error::ApiError;
pub use models::{
    AdStatus, Advert, AdvertForm, AuthResponse, Category, Currency, LoginData, PasswordChange,
    ProfileForm, RegisterData, Role, User,
};
pub use session::{Session, SessionState};
pub use validation::FieldErrors;
