//! The shoe card itself.

use chrono::NaiveDate;

use sole_commerce::prelude::*;

use super::html_escape;

/// Render one shoe card.
///
/// The card links to the detail page under `detail_base`, shows the
/// promotional flag for non-default variants, and shows the sale price
/// (with the list price struck through) only when the shoe is on sale.
pub fn render_shoe_card(listing: &ShoeListing, today: NaiveDate, detail_base: &str) -> String {
    let variant = listing.display_variant(today);
    let token = variant.presentation();

    let flag_html = match token.flag {
        Some(flag) => format!(
            r#"<div class="shoe-flag" style="background-color: {};">{}</div>
            "#,
            flag.background, flag.text
        ),
        None => String::new(),
    };

    let sale_html = match (variant, listing.sale_price) {
        (DisplayVariant::OnSale, Some(sale)) => format!(
            r#"<span class="shoe-sale-price">{}</span>"#,
            sale.display()
        ),
        _ => String::new(),
    };

    format!(
        r#"<article class="shoe-card" data-variant="{}">
    <a href="{}" class="shoe-link">
        <div class="shoe-image-wrapper">
            {}<img class="shoe-image" src="{}" alt="{}" loading="lazy">
        </div>
        <div class="shoe-row">
            <h3 class="shoe-name">{}</h3>
            <span class="shoe-price" style="color: {}; text-decoration: {};">{}</span>
        </div>
        <div class="shoe-row">
            <p class="color-info">{}</p>
            {}
        </div>
    </a>
</article>"#,
        variant.as_str(),
        html_escape(&listing.detail_path(detail_base)),
        flag_html,
        html_escape(&listing.image_url),
        html_escape(&listing.name),
        html_escape(&listing.name),
        token.text_color,
        token.text_decoration.as_css(),
        listing.price.display(),
        pluralize("Color", listing.num_of_colors as usize),
        sale_html
    )
}
