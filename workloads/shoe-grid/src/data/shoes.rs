//! Sample catalog.
//!
//! In production this comes from the catalog service; release dates are
//! expressed relative to `today` so every card variant stays exercised.

use chrono::{Days, Months, NaiveDate};

use sole_commerce::prelude::*;

/// The sample listing set shown on the grid page.
pub fn sample_listings(today: NaiveDate) -> Vec<ShoeListing> {
    let usd = |cents: i64| Money::new(cents, Currency::USD);

    vec![
        ShoeListing::new(
            "tranquil-artisan",
            "Tranquil Artisan FS",
            "https://picsum.photos/seed/tranquil-artisan/340/312",
            usd(16500),
            today - Days::new(5),
            4,
        ),
        ShoeListing::new(
            "dazzling-bubble",
            "Dazzling Bubble Mid",
            "https://picsum.photos/seed/dazzling-bubble/340/312",
            usd(14900),
            today - Months::new(24),
            1,
        )
        .with_sale_price(usd(12000)),
        ShoeListing::new(
            "morning-jogger",
            "Morning Jogger Low",
            "https://picsum.photos/seed/morning-jogger/340/312",
            usd(8900),
            today - Months::new(8),
            2,
        ),
        ShoeListing::new(
            "aurora-trail",
            "Aurora Trail GTX",
            "https://picsum.photos/seed/aurora-trail/340/312",
            usd(17900),
            today - Days::new(12),
            6,
        ),
        // On sale and brand new at once; the card shows the sale treatment.
        ShoeListing::new(
            "velocity-racer",
            "Velocity Racer Flyweight",
            "https://picsum.photos/seed/velocity-racer/340/312",
            usd(19900),
            today - Days::new(3),
            2,
        )
        .with_sale_price(usd(16000)),
        ShoeListing::new(
            "classic-court",
            "Classic Court '82",
            "https://picsum.photos/seed/classic-court/340/312",
            usd(9900),
            today - Months::new(60),
            9,
        ),
    ]
}
