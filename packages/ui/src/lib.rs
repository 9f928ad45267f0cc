//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState, LogoutButton, SessionProvider};

mod guard;
pub use guard::{GuestOnly, ProtectedRoute};

mod navbar;
pub use navbar::Navbar;

mod ad_card;
pub use ad_card::{AdCard, StatusBadge};

/// Today's date in local time.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
