//! Display variant resolution for shoe cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// How long (in days) after its release a shoe counts as newly released.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The visual treatment a shoe card gets.
///
/// Derived from the listing on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    /// The shoe has a sale price.
    OnSale,
    /// The shoe was released within the last month.
    NewRelease,
    /// Neither on sale nor newly released.
    #[default]
    Default,
}

impl DisplayVariant {
    /// Resolve the variant for a listing.
    ///
    /// A shoe can be on sale and newly released at the same time; when that
    /// happens the sale wins and the card gets the `OnSale` treatment. The
    /// sale check looks only at the presence of a sale price, never at how
    /// it relates to the list price.
    pub fn resolve(sale_price: Option<Money>, release_date: NaiveDate, today: NaiveDate) -> Self {
        if sale_price.is_some() {
            DisplayVariant::OnSale
        } else if is_new_release(release_date, today) {
            DisplayVariant::NewRelease
        } else {
            DisplayVariant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayVariant::OnSale => "on-sale",
            DisplayVariant::NewRelease => "new-release",
            DisplayVariant::Default => "default",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "on-sale" => Some(DisplayVariant::OnSale),
            "new-release" => Some(DisplayVariant::NewRelease),
            "default" => Some(DisplayVariant::Default),
            _ => None,
        }
    }
}

/// A release counts as new for strictly less than [`NEW_RELEASE_WINDOW_DAYS`]
/// days. A date in the future has not been out that long either, so it
/// qualifies as well.
fn is_new_release(release_date: NaiveDate, today: NaiveDate) -> bool {
    (today - release_date).num_days() < NEW_RELEASE_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_sale_price_wins_regardless_of_age() {
        let today = date(2026, 8, 25);
        // Released a decade ago, still on sale.
        let variant = DisplayVariant::resolve(Some(usd(12000)), date(2016, 8, 25), today);
        assert_eq!(variant, DisplayVariant::OnSale);
    }

    #[test]
    fn test_sale_price_above_list_price_still_on_sale() {
        let today = date(2026, 8, 25);
        // The resolver only checks presence, not the amount.
        let variant = DisplayVariant::resolve(Some(usd(999_999)), date(2026, 8, 20), today);
        assert_eq!(variant, DisplayVariant::OnSale);
    }

    #[test]
    fn test_recent_release_without_sale() {
        let today = date(2026, 8, 25);
        let variant = DisplayVariant::resolve(None, date(2026, 8, 20), today);
        assert_eq!(variant, DisplayVariant::NewRelease);
    }

    #[test]
    fn test_old_release_without_sale() {
        let today = date(2026, 8, 25);
        let variant = DisplayVariant::resolve(None, date(2024, 8, 25), today);
        assert_eq!(variant, DisplayVariant::Default);
    }

    #[test]
    fn test_sale_beats_new_release() {
        let today = date(2026, 8, 25);
        // Both conditions hold; the sale takes priority.
        let variant = DisplayVariant::resolve(Some(usd(5000)), date(2026, 8, 20), today);
        assert_eq!(variant, DisplayVariant::OnSale);
    }

    #[test]
    fn test_window_boundary() {
        let today = date(2026, 8, 25);
        let day = chrono::Days::new(1);

        let just_inside = today - chrono::Days::new(29);
        assert_eq!(
            DisplayVariant::resolve(None, just_inside, today),
            DisplayVariant::NewRelease
        );

        let on_boundary = just_inside - day;
        assert_eq!(
            DisplayVariant::resolve(None, on_boundary, today),
            DisplayVariant::Default
        );
    }

    #[test]
    fn test_future_release_counts_as_new() {
        let today = date(2026, 8, 25);
        let variant = DisplayVariant::resolve(None, date(2026, 9, 10), today);
        assert_eq!(variant, DisplayVariant::NewRelease);
    }

    #[test]
    fn test_string_round_trip() {
        for v in [
            DisplayVariant::OnSale,
            DisplayVariant::NewRelease,
            DisplayVariant::Default,
        ] {
            assert_eq!(DisplayVariant::from_label(v.as_str()), Some(v));
        }
        assert_eq!(DisplayVariant::from_label("clearance"), None);
    }
}
