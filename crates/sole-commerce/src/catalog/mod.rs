//! Catalog types: shoe listings and their card display logic.

mod listing;
mod presentation;
mod variant;

pub use listing::ShoeListing;
pub use presentation::{palette, Flag, Presentation, TextDecoration};
pub use variant::{DisplayVariant, NEW_RELEASE_WINDOW_DAYS};
