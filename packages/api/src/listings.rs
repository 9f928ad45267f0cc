//! Filtering, sorting and statistics for the "My ads" page.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{AdStatus, Advert, Currency};

/// Adverts expiring within this many days count as "expiring soon".
pub const EXPIRY_WARNING_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    CreatedAt,
    ViewsCount,
    ExpiresAt,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::CreatedAt, SortBy::ViewsCount, SortBy::ExpiresAt];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "created_at",
            SortBy::ViewsCount => "views_count",
            SortBy::ExpiresAt => "expires_at",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "Izveides datums",
            SortBy::ViewsCount => "Skatījumi",
            SortBy::ExpiresAt => "Beigu datums",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Search, status filter and sort applied to a list of adverts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdQuery {
    pub search: String,
    /// `None` shows every status.
    pub status: Option<AdStatus>,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

impl AdQuery {
    pub fn matches(&self, ad: &Advert) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || ad.title.to_lowercase().contains(&needle)
            || ad.description.to_lowercase().contains(&needle);
        let status_ok = self.status.is_none_or(|s| s == ad.status);
        text_ok && status_ok
    }

    pub fn apply(&self, ads: &[Advert]) -> Vec<Advert> {
        let mut out: Vec<Advert> = ads.iter().filter(|ad| self.matches(ad)).cloned().collect();
        // sort_by is stable, equal keys keep their input order
        out.sort_by(|a, b| {
            let ord = self.compare(a, b);
            match self.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        out
    }

    fn compare(&self, a: &Advert, b: &Advert) -> Ordering {
        match self.sort_by {
            SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
            SortBy::ViewsCount => a.views_count.cmp(&b.views_count),
            SortBy::ExpiresAt => a.expires_at.cmp(&b.expires_at),
        }
    }
}

/// Summary counters shown above the advert table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdStats {
    pub active: usize,
    pub pending: usize,
    pub total_views: u64,
    pub featured: usize,
    pub expiring_soon: usize,
}

impl AdStats {
    pub fn collect(ads: &[Advert], today: NaiveDate) -> Self {
        ads.iter().fold(Self::default(), |mut stats, ad| {
            match ad.status {
                AdStatus::Active => stats.active += 1,
                AdStatus::Pending => stats.pending += 1,
                _ => {}
            }
            stats.total_views += u64::from(ad.views_count);
            if ad.is_featured_on(today) {
                stats.featured += 1;
            }
            if ad.status == AdStatus::Active
                && (0..=EXPIRY_WARNING_DAYS).contains(&days_until_expiry(ad.expires_at, today))
            {
                stats.expiring_soon += 1;
            }
            stats
        })
    }
}

/// Whole days from `today` until `expires_at`; negative once expired.
pub fn days_until_expiry(expires_at: NaiveDate, today: NaiveDate) -> i64 {
    (expires_at - today).num_days()
}

/// Human readable expiry: "Beigsies pēc N dienām" or "Beidzies".
pub fn expiry_label(expires_at: NaiveDate, today: NaiveDate) -> String {
    match days_until_expiry(expires_at, today) {
        days if days > 0 => format!("Beigsies pēc {days} dienām"),
        _ => "Beidzies".to_string(),
    }
}

/// Format a price with space-grouped thousands, e.g. `€15 500` or `USD899`.
/// Fractions are kept to two places only when present.
pub fn format_price(price: f64, currency: Currency) -> String {
    let prefix = match currency {
        Currency::Eur => currency.symbol().to_string(),
        other => other.code().to_string(),
    };

    // Past this the cents no longer fit in a u64; show whole units only.
    let scaled = (price.abs() * 100.0).round();
    let (digits, fraction) = if scaled < u64::MAX as f64 {
        let cents = scaled as u64;
        ((cents / 100).to_string(), cents % 100)
    } else {
        (format!("{:.0}", price.abs()), 0)
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && scaled > 0.0 { "-" } else { "" };
    if fraction == 0 {
        format!("{prefix}{sign}{grouped}")
    } else {
        format!("{prefix}{sign}{grouped},{fraction:02}")
    }
}

/// `dd.mm.yyyy`, the way Latvian dates are written.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Drop every advert whose id is in `ids`. Returns how many were removed.
pub fn remove_ads(ads: &mut Vec<Advert>, ids: &[u64]) -> usize {
    let ids: HashSet<u64> = ids.iter().copied().collect();
    let before = ads.len();
    ads.retain(|ad| !ids.contains(&ad.id));
    before - ads.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(ads: &[Advert]) -> Vec<u64> {
        ads.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_default_query_sorts_newest_first() {
        let ads = catalog::my_ads();
        let sorted = AdQuery::default().apply(&ads);
        assert_eq!(ids(&sorted), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let ads = catalog::my_ads();
        let query = AdQuery {
            search: "TOYOTA".into(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&ads)), vec![1]);

        let by_description = AdQuery {
            search: "RĪGAS".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_description.apply(&ads)), vec![3]);
    }

    #[test]
    fn test_status_filter_and_views_sort() {
        let ads = catalog::my_ads();
        let query = AdQuery {
            status: Some(AdStatus::Active),
            sort_by: SortBy::ViewsCount,
            order: SortOrder::Asc,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&ads)), vec![1, 2]);
    }

    #[test]
    fn test_stats() {
        let stats = AdStats::collect(&catalog::my_ads(), day(2025, 2, 1));
        assert_eq!(stats.active, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total_views, 156 + 234 + 12 + 45);
        assert_eq!(stats.featured, 0);
        assert_eq!(stats.expiring_soon, 2);

        let early = AdStats::collect(&catalog::my_ads(), day(2025, 1, 10));
        assert_eq!(early.featured, 1);
        assert_eq!(early.expiring_soon, 0);
    }

    #[test]
    fn test_days_until_expiry() {
        assert_eq!(days_until_expiry(day(2025, 2, 7), day(2025, 2, 1)), 6);
        assert_eq!(days_until_expiry(day(2025, 1, 1), day(2025, 1, 3)), -2);
        assert_eq!(expiry_label(day(2025, 2, 7), day(2025, 2, 1)), "Beigsies pēc 6 dienām");
        assert_eq!(expiry_label(day(2025, 2, 1), day(2025, 2, 1)), "Beidzies");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(15500.0, Currency::Eur), "€15 500");
        assert_eq!(format_price(899.0, Currency::Eur), "€899");
        assert_eq!(format_price(1234567.5, Currency::Usd), "USD1 234 567,50");
        assert_eq!(format_price(0.0, Currency::Gbp), "GBP0");
    }

    #[test]
    fn test_format_price_beyond_cent_range() {
        assert_eq!(
            format_price(1e15, Currency::Eur),
            "€1 000 000 000 000 000"
        );
        assert_eq!(
            format_price(1e20, Currency::Eur),
            "€100 000 000 000 000 000 000"
        );
    }

    #[test]
    fn test_remove_ads() {
        let mut ads = catalog::my_ads();
        assert_eq!(remove_ads(&mut ads, &[2, 4, 99]), 2);
        assert_eq!(ids(&ads), vec![1, 3]);
        assert_eq!(remove_ads(&mut ads, &[]), 0);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(day(2025, 1, 7)), "07.01.2025");
    }
}
