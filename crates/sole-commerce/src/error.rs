//! Storefront error types.

use thiserror::Error;

/// Errors that can occur when handling storefront data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A required display field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Negative amount where a non-negative price is required.
    #[error("Negative price for {field}: {amount_cents} cents")]
    NegativePrice {
        field: &'static str,
        amount_cents: i64,
    },

    /// Sale price carries a different currency than the list price.
    #[error("Currency mismatch: price is {expected}, sale price is {got}")]
    CurrencyMismatch { expected: String, got: String },
}
