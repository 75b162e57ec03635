//! Page shell around the grid sections.

use crate::sections::html_escape;

/// Render the full page: head with embedded styles, then the given
/// sections, then the footer.
pub fn render_page(title: &str, sections: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
    <main class="storefront">
{}
    </main>
    <footer class="site-footer">
        <p>Rendered at the edge.</p>
    </footer>
</body>
</html>"#,
        html_escape(title),
        STOREFRONT_STYLES,
        sections
    )
}

/// CSS for the listing grid and the cards.
const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: hsl(0deg 0% 100%); }
.storefront { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.site-footer { padding: 2rem; text-align: center; color: hsl(220deg 5% 40%); }

/* Header */
.grid-header { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 2rem; }
.store-name { font-size: 1.5rem; margin: 0; }
.listing-count { color: hsl(220deg 5% 40%); margin: 0; }

/* Grid */
.shoe-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(275px, 1fr)); gap: 2rem; }

/* Card */
.shoe-card { position: relative; }
.shoe-link { text-decoration: none; color: inherit; }
.shoe-image-wrapper { position: relative; margin-bottom: 12px; }
.shoe-image { width: 100%; border-radius: 16px 16px 4px 4px; }
.shoe-row { font-size: 1rem; display: flex; justify-content: space-between; }
.shoe-name { font-weight: 500; color: hsl(220deg 3% 20%); margin: 0; }
.color-info { color: hsl(220deg 5% 40%); margin: 0; }
.shoe-sale-price { font-weight: 500; color: hsl(340deg 65% 47%); }

/* Flag */
.shoe-flag {
    font-size: 14px;
    font-weight: 700;
    text-align: center;
    color: hsl(0deg 0% 100%);
    border-radius: 2px;
    padding-left: 10px;
    padding-right: 10px;
    height: 32px;
    line-height: 32px; /* equal to height, so the text centers vertically */
    position: absolute;
    top: 12px;
    right: -4px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_sections() {
        let html = render_page("Sole&Ankle", "<section>cards</section>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sole&amp;Ankle</title>"));
        assert!(html.contains("<section>cards</section>"));
        assert!(html.contains(".shoe-flag"));
    }
}
