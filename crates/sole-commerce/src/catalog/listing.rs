//! Shoe listing type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::variant::DisplayVariant;
use crate::error::CommerceError;
use crate::ids::{ShoeId, Slug};
use crate::money::Money;

/// A shoe as shown in the listing grid.
///
/// Immutable input record, supplied by the catalog. One per card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoeListing {
    /// Unique shoe identifier.
    pub id: ShoeId,
    /// URL-friendly slug, used as the detail-route key.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image_url: String,
    /// List price.
    pub price: Money,
    /// Sale price, present only while the shoe is discounted. Assumed to be
    /// below the list price upstream; nothing here depends on that.
    pub sale_price: Option<Money>,
    /// Release date, used for the new-release check.
    pub release_date: NaiveDate,
    /// Number of available color variants.
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Create a new listing. The slug doubles as the shoe id.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: Money,
        release_date: NaiveDate,
        num_of_colors: u32,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: ShoeId::new(slug.clone()),
            slug: Slug::new(slug),
            name: name.into(),
            image_url: image_url.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors,
        }
    }

    /// Set a sale price.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Check if the shoe currently has a sale price.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Resolve the card variant for this listing as of `today`.
    pub fn display_variant(&self, today: NaiveDate) -> DisplayVariant {
        DisplayVariant::resolve(self.sale_price, self.release_date, today)
    }

    /// Path of the detail page this card links to, under the store's
    /// configured base path (e.g. `/shoe`).
    pub fn detail_path(&self, base_path: &str) -> String {
        format!("{}/{}", base_path.trim_end_matches('/'), self.slug)
    }

    /// Validate the listing at the input boundary.
    ///
    /// A sale price at or above the list price is accepted: the variant
    /// resolution must keep working for such listings.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        if self.image_url.trim().is_empty() {
            return Err(CommerceError::MissingField("image_url"));
        }
        if self.price.is_negative() {
            return Err(CommerceError::NegativePrice {
                field: "price",
                amount_cents: self.price.amount_cents,
            });
        }
        if let Some(sale) = self.sale_price {
            if sale.is_negative() {
                return Err(CommerceError::NegativePrice {
                    field: "sale_price",
                    amount_cents: sale.amount_cents,
                });
            }
            if sale.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.to_string(),
                    got: sale.currency.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn listing() -> ShoeListing {
        ShoeListing::new(
            "tranquil-artisan",
            "Tranquil Artisan FS",
            "/images/tranquil-artisan.jpg",
            Money::new(14900, Currency::USD),
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            7,
        )
    }

    #[test]
    fn test_listing_creation() {
        let l = listing();
        assert_eq!(l.id.as_str(), "tranquil-artisan");
        assert!(!l.is_on_sale());
    }

    #[test]
    fn test_detail_path() {
        let l = listing();
        assert_eq!(l.detail_path("/shoe"), "/shoe/tranquil-artisan");
        // A trailing slash on the base does not double up.
        assert_eq!(l.detail_path("/sneakers/"), "/sneakers/tranquil-artisan");
    }

    #[test]
    fn test_display_variant_delegation() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let l = listing().with_sale_price(Money::new(9900, Currency::USD));
        assert_eq!(l.display_variant(today), DisplayVariant::OnSale);
        assert_eq!(listing().display_variant(today), DisplayVariant::Default);
    }

    #[test]
    fn test_validate_ok() {
        assert!(listing().validate().is_ok());
        // Sale above list price is still valid input.
        let l = listing().with_sale_price(Money::new(20000, Currency::USD));
        assert!(l.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut l = listing();
        l.name = "  ".to_string();
        assert!(matches!(
            l.validate(),
            Err(CommerceError::MissingField("name"))
        ));
    }

    #[test]
    fn test_validate_empty_image_url() {
        let mut l = listing();
        l.image_url = String::new();
        assert!(matches!(
            l.validate(),
            Err(CommerceError::MissingField("image_url"))
        ));
    }

    #[test]
    fn test_validate_negative_price() {
        let mut l = listing();
        l.price = Money::new(-100, Currency::USD);
        assert!(matches!(
            l.validate(),
            Err(CommerceError::NegativePrice { field: "price", .. })
        ));
    }

    #[test]
    fn test_validate_currency_mismatch() {
        let l = listing().with_sale_price(Money::new(9900, Currency::EUR));
        assert!(matches!(
            l.validate(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
