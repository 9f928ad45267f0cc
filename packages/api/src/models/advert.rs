//! # Advert and category models
//!
//! Adverts are mock data in this client (see [`crate::catalog`]); the types
//! still follow the backend's JSON field names so swapping in real endpoints
//! later does not change the pages.
//!
//! [`AdvertForm`] is the raw state of the "create ad" form. Price stays a
//! string until [`AdvertForm::parsed_price`] so half-typed input never panics.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// How long a new advert stays listed when the form leaves the date empty.
pub const DEFAULT_LISTING_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    Draft,
    Pending,
    Active,
    Expired,
    Rejected,
}

impl AdStatus {
    pub const ALL: [AdStatus; 5] = [
        AdStatus::Draft,
        AdStatus::Pending,
        AdStatus::Active,
        AdStatus::Expired,
        AdStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdStatus::Draft => "draft",
            AdStatus::Pending => "pending",
            AdStatus::Active => "active",
            AdStatus::Expired => "expired",
            AdStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdStatus::Draft => "Melnraksts",
            AdStatus::Pending => "Gaidīšanā",
            AdStatus::Active => "Aktīvs",
            AdStatus::Expired => "Beidzies",
            AdStatus::Rejected => "Noraidīts",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Gbp];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advert {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub currency: Currency,
    pub status: AdStatus,
    pub location: String,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub views_count: u32,
    pub created_at: NaiveDate,
    pub expires_at: NaiveDate,
    #[serde(default)]
    pub is_negotiable: bool,
    #[serde(default)]
    pub featured_until: Option<NaiveDate>,
}

impl Advert {
    pub fn is_featured_on(&self, day: NaiveDate) -> bool {
        self.featured_until.is_some_and(|until| day <= until)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Number of listings, shown on the home page tiles.
    #[serde(default)]
    pub count: Option<u32>,
}

/// Raw state of the "create ad" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvertForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub currency: Currency,
    pub category_id: Option<u64>,
    pub location: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub is_negotiable: bool,
    pub expires_at: Option<NaiveDate>,
    pub images: Vec<String>,
}

impl AdvertForm {
    /// Empty form with the contact fields taken from the signed-in user.
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            contact_phone: user.and_then(|u| u.phone.clone()).unwrap_or_default(),
            contact_email: user.map(|u| u.email.clone()).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// `Ok(None)` for an empty price field, `Err` for anything that is not a
    /// non-negative number. Accepts a decimal comma.
    pub fn parsed_price(&self) -> Result<Option<f64>, String> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let value: f64 = raw
            .replace(',', ".")
            .parse()
            .map_err(|_| format!("not a number: {raw:?}"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(format!("price out of range: {value}"));
        }
        Ok(Some(value))
    }

    /// Turn a validated form into a listing awaiting moderation.
    pub fn into_advert(self, id: u64, category: &str, today: NaiveDate) -> Advert {
        let price = self.parsed_price().ok().flatten().unwrap_or(0.0);
        let expires_at = self.expires_at.unwrap_or_else(|| {
            today
                .checked_add_days(Days::new(DEFAULT_LISTING_DAYS))
                .unwrap_or(today)
        });
        Advert {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            currency: self.currency,
            status: AdStatus::Pending,
            location: self.location.trim().to_string(),
            category: category.to_string(),
            images: self.images,
            views_count: 0,
            created_at: today,
            expires_at,
            is_negotiable: self.is_negotiable,
            featured_until: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_strings() {
        for status in AdStatus::ALL {
            assert_eq!(AdStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AdStatus::parse("sold"), None);
        assert_eq!(AdStatus::Pending.label(), "Gaidīšanā");
        assert_eq!(
            serde_json::to_string(&AdStatus::Active).unwrap(),
            "\"active\""
        );
    }

    #[test]
    fn test_currency() {
        assert_eq!(Currency::parse("usd"), Some(Currency::Usd));
        assert_eq!(Currency::parse("LVL"), None);
        assert_eq!(Currency::default().symbol(), "€");
    }

    #[test]
    fn test_parsed_price() {
        let mut form = AdvertForm::default();
        assert_eq!(form.parsed_price(), Ok(None));
        form.price = "12,50".to_string();
        assert_eq!(form.parsed_price(), Ok(Some(12.5)));
        form.price = "-1".to_string();
        assert!(form.parsed_price().is_err());
        form.price = "abc".to_string();
        assert!(form.parsed_price().is_err());
    }

    #[test]
    fn test_into_advert_defaults() {
        let form = AdvertForm {
            title: " Velosipēds ".to_string(),
            description: "Labs".to_string(),
            price: "125".to_string(),
            category_id: Some(7),
            location: "Daugavpils".to_string(),
            ..AdvertForm::default()
        };
        let ad = form.into_advert(42, "Sports", day(2025, 1, 10));
        assert_eq!(ad.id, 42);
        assert_eq!(ad.title, "Velosipēds");
        assert_eq!(ad.status, AdStatus::Pending);
        assert_eq!(ad.price, 125.0);
        assert_eq!(ad.expires_at, day(2025, 2, 9));
        assert!(!ad.is_featured_on(day(2025, 1, 10)));
    }

    #[test]
    fn test_prefill_contacts() {
        let user = User {
            id: 1,
            name: "Anna".to_string(),
            email: "anna@example.lv".to_string(),
            phone: Some("+37120000000".to_string()),
            is_active: true,
            email_verified_at: None,
            phone_verified_at: None,
            role: None,
        };
        let form = AdvertForm::for_user(Some(&user));
        assert_eq!(form.contact_email, "anna@example.lv");
        assert_eq!(form.contact_phone, "+37120000000");
        assert_eq!(AdvertForm::for_user(None), AdvertForm::default());
    }
}
