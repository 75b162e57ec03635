//! Catalog data for the grid.

mod shoes;

pub use shoes::sample_listings;
