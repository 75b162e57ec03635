//! HTML sections for the listing grid page.

mod card;
mod grid;

pub use card::render_shoe_card;
pub use grid::{render_grid_header, render_shoe_grid};

/// HTML escape to prevent XSS.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
