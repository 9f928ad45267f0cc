//! # Mock catalogue
//!
//! There is no advert backend yet, so categories and adverts are hard-coded
//! here. The category tree is flat with `parent_id` links; the home page shows
//! the top-level entries with their listing counts.

use chrono::NaiveDate;

use crate::models::{AdStatus, Advert, Category, Currency};

fn category(id: u64, name: &str, slug: &str, parent_id: Option<u64>, count: Option<u32>) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        parent_id,
        count,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(1, "Transportlīdzekļi", "transport", None, Some(1234)),
        category(2, "Automašīnas", "cars", Some(1), None),
        category(3, "Motocikli", "motorcycles", Some(1), None),
        category(4, "Nekustamais īpašums", "real-estate", None, Some(567)),
        category(5, "Dzīvokļi", "apartments", Some(4), None),
        category(6, "Mājas", "houses", Some(4), None),
        category(7, "Elektronika", "electronics", None, Some(456)),
        category(8, "Telefoni", "phones", Some(7), None),
        category(9, "Datori", "computers", Some(7), None),
        category(10, "Darbs", "jobs", None, Some(890)),
        category(11, "Apģērbs", "fashion", None, Some(234)),
        category(12, "Mājas un dārzs", "home-garden", None, Some(678)),
    ]
}

pub fn main_categories() -> Vec<Category> {
    categories()
        .into_iter()
        .filter(|c| c.parent_id.is_none())
        .collect()
}

pub fn subcategories(parent: u64) -> Vec<Category> {
    categories()
        .into_iter()
        .filter(|c| c.parent_id == Some(parent))
        .collect()
}

pub fn find_category(id: u64) -> Option<Category> {
    categories().into_iter().find(|c| c.id == id)
}

pub fn find_category_by_slug(slug: &str) -> Option<Category> {
    categories().into_iter().find(|c| c.slug == slug)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

struct Seed {
    id: u64,
    title: &'static str,
    description: &'static str,
    price: f64,
    status: AdStatus,
    location: &'static str,
    category: &'static str,
    image: Option<&'static str>,
    views: u32,
    created: NaiveDate,
    negotiable: bool,
    featured_until: Option<NaiveDate>,
}

impl From<Seed> for Advert {
    fn from(seed: Seed) -> Self {
        Advert {
            id: seed.id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            price: seed.price,
            currency: Currency::Eur,
            status: seed.status,
            location: seed.location.to_string(),
            category: seed.category.to_string(),
            images: seed.image.map(str::to_string).into_iter().collect(),
            views_count: seed.views,
            created_at: seed.created,
            expires_at: seed.created + chrono::Months::new(1),
            is_negotiable: seed.negotiable,
            featured_until: seed.featured_until,
        }
    }
}

const CAR_IMAGE: &str =
    "https://images.unsplash.com/photo-1563720223185-11003d516935?w=300&h=200&fit=crop";
const PHONE_IMAGE: &str =
    "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=300&h=200&fit=crop";
const FLAT_IMAGE: &str =
    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=300&h=200&fit=crop";
const CODE_IMAGE: &str =
    "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=300&h=200&fit=crop";

fn toyota() -> Advert {
    Seed {
        id: 1,
        title: "Toyota Corolla 2020, laba stāvoklī",
        description: "Pārdodu savu Toyota Corolla 2020. gada automašīnu...",
        price: 15500.0,
        status: AdStatus::Active,
        location: "Rīga",
        category: "Transportlīdzekļi",
        image: Some(CAR_IMAGE),
        views: 156,
        created: date(2025, 1, 7),
        negotiable: true,
        featured_until: Some(date(2025, 1, 14)),
    }
    .into()
}

fn iphone() -> Advert {
    Seed {
        id: 2,
        title: "iPhone 14 Pro, 256GB, ideāls stāvoklis",
        description: "Pārdodu iPhone 14 Pro ar 256GB atmiņu...",
        price: 899.0,
        status: AdStatus::Active,
        location: "Liepāja",
        category: "Elektronika",
        image: Some(PHONE_IMAGE),
        views: 234,
        created: date(2025, 1, 5),
        negotiable: true,
        featured_until: None,
    }
    .into()
}

/// The signed-in user's adverts shown on "My ads".
pub fn my_ads() -> Vec<Advert> {
    vec![
        toyota(),
        iphone(),
        Seed {
            id: 3,
            title: "Dzīvoklis Centrā, 3 istabas",
            description: "Īrēju dzīvokli Rīgas centrā...",
            price: 750.0,
            status: AdStatus::Pending,
            location: "Rīga, Centrs",
            category: "Nekustamais īpašums",
            image: Some(FLAT_IMAGE),
            views: 12,
            created: date(2025, 1, 8),
            negotiable: false,
            featured_until: None,
        }
        .into(),
        Seed {
            id: 4,
            title: "Velosipēds, ļoti labs stāvoklis",
            description: "Pārdodu velosipēdu...",
            price: 125.0,
            status: AdStatus::Expired,
            location: "Daugavpils",
            category: "Sports",
            image: None,
            views: 45,
            created: date(2024, 12, 1),
            negotiable: false,
            featured_until: None,
        }
        .into(),
    ]
}

/// Promoted adverts for the home page.
pub fn featured_ads() -> Vec<Advert> {
    vec![
        toyota(),
        Seed {
            id: 5,
            title: "3-ist. dzīvoklis Centrā, renovēts",
            description: "Renovēts trīsistabu dzīvoklis ar skatu uz parku. Īre uz ilgu laiku.",
            price: 750.0,
            status: AdStatus::Active,
            location: "Rīga, Centrs",
            category: "Nekustamais īpašums",
            image: Some(FLAT_IMAGE),
            views: 89,
            created: date(2025, 1, 9),
            negotiable: false,
            featured_until: Some(date(2025, 1, 16)),
        }
        .into(),
        iphone(),
        Seed {
            id: 6,
            title: "Web Developer pozīcija remote",
            description: "Meklējam Rust un TypeScript izstrādātāju attālinātam darbam.",
            price: 2500.0,
            status: AdStatus::Active,
            location: "Attālināti",
            category: "Darbs",
            image: Some(CODE_IMAGE),
            views: 78,
            created: date(2025, 1, 7),
            negotiable: false,
            featured_until: Some(date(2025, 1, 21)),
        }
        .into(),
    ]
}

/// Most recent adverts for the home page.
pub fn latest_ads() -> Vec<Advert> {
    vec![
        Seed {
            id: 7,
            title: "Mēbeles - dīvāns un krēsli",
            description: "Dīvāns un divi krēsli, labā stāvoklī. Savākšana Jūrmalā.",
            price: 200.0,
            status: AdStatus::Active,
            location: "Jūrmala",
            category: "Mājas",
            image: None,
            views: 25,
            created: date(2025, 1, 10),
            negotiable: true,
            featured_until: None,
        }
        .into(),
        Seed {
            id: 8,
            title: "Grāmatu kolekcija, dažādas tēmas",
            description: "Vairāk nekā 40 grāmatas: vēsture, daiļliteratūra, ceļojumi.",
            price: 50.0,
            status: AdStatus::Active,
            location: "Ventspils",
            category: "Grāmatas",
            image: None,
            views: 8,
            created: date(2025, 1, 10),
            negotiable: false,
            featured_until: None,
        }
        .into(),
    ]
}

/// Every distinct advert in the catalogue.
pub fn all_ads() -> Vec<Advert> {
    let mut seen = std::collections::HashSet::new();
    my_ads()
        .into_iter()
        .chain(featured_ads())
        .chain(latest_ads())
        .filter(|ad| seen.insert(ad.id))
        .collect()
}

/// Whether `ad` is filed under the category `slug` or one of its children.
/// Adverts carry the category name, not its id.
pub fn in_category(ad: &Advert, slug: &str) -> bool {
    let Some(parent) = find_category_by_slug(slug) else {
        return false;
    };
    ad.category == parent.name
        || subcategories(parent.id)
            .iter()
            .any(|child| child.name == ad.category)
}

/// Look an advert up across every mock list.
pub fn find_advert(id: u64) -> Option<Advert> {
    my_ads()
        .into_iter()
        .chain(featured_ads())
        .chain(latest_ads())
        .find(|ad| ad.id == id)
}
