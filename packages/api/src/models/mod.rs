//! Data models exchanged with the backend and shown by the pages.

mod advert;
mod auth;
mod user;

pub use advert::{AdStatus, Advert, AdvertForm, Category, Currency};
pub use auth::{AuthResponse, LoginData, RegisterData};
pub(crate) use auth::MeResponse;
pub use user::{PasswordChange, ProfileForm, Role, User};
