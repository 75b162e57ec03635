//! Storefront domain types and display logic for Sole Storefront.
//!
//! This crate provides the types behind the shoe listing grid:
//!
//! - **Catalog**: shoe listings, display variants, presentation tokens
//! - **Money**: cents-based monetary values with currency-aware display
//! - **Ids**: newtype identifiers for type safety
//!
//! # Example
//!
//! ```rust,ignore
//! use sole_commerce::prelude::*;
//!
//! let listing = ShoeListing::new(
//!     "tranquil-artisan",
//!     "Tranquil Artisan FS",
//!     "/images/tranquil-artisan.jpg",
//!     Money::new(14900, Currency::USD),
//!     release_date,
//!     7,
//! );
//!
//! let variant = listing.display_variant(today);
//! let token = variant.presentation();
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod text;

pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::text::pluralize;

    pub use crate::catalog::{DisplayVariant, Flag, Presentation, ShoeListing, TextDecoration};
}
