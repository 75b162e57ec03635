//! Grid section wrapping the shoe cards.

use chrono::NaiveDate;

use sole_commerce::prelude::*;

use super::card::render_shoe_card;
use super::html_escape;

/// Render the grid header with the store name and listing count.
pub fn render_grid_header(store_name: &str, count: usize) -> String {
    format!(
        r#"<header class="grid-header" data-section="header">
    <h1 class="store-name">{}</h1>
    <p class="listing-count">{}</p>
</header>"#,
        html_escape(store_name),
        pluralize("Shoe", count)
    )
}

/// Render the listing grid section.
pub fn render_shoe_grid(listings: &[ShoeListing], today: NaiveDate, detail_base: &str) -> String {
    let cards: String = listings
        .iter()
        .map(|l| render_shoe_card(l, today, detail_base))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="shoe-grid" data-section="grid">
        {}
</section>"#,
        cards
    )
}
