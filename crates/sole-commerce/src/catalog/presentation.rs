//! Presentation tokens for shoe cards.
//!
//! Each [`DisplayVariant`] maps to exactly one [`Presentation`] through an
//! exhaustive `match`, so adding a variant without a table entry is a
//! compile error rather than a missing-key lookup at render time.

use super::variant::DisplayVariant;

/// Named color tokens for the storefront.
pub mod palette {
    pub const WHITE: &str = "hsl(0deg 0% 100%)";
    /// Dark gray, used for de-emphasized text and struck-through prices.
    pub const GRAY_700: &str = "hsl(220deg 5% 40%)";
    /// Near black, the default text color.
    pub const GRAY_900: &str = "hsl(220deg 3% 20%)";
    /// Brand pink, used for the sale price itself.
    pub const PRIMARY: &str = "hsl(340deg 65% 47%)";
    /// Flag background for on-sale cards.
    pub const FLAG_SALE: &str = "#C5295D";
    /// Flag background for new-release cards.
    pub const FLAG_NEW_RELEASE: &str = "#6868D9";
}

/// Text decoration applied to the list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoration {
    #[default]
    None,
    LineThrough,
}

impl TextDecoration {
    /// The CSS value for this decoration.
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

/// The promotional flag shown in the card's top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    /// Flag copy (e.g. "Sale").
    pub text: &'static str,
    /// Flag background color.
    pub background: &'static str,
}

/// The visual style bundle for a resolved variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Color applied to the list price.
    pub text_color: &'static str,
    /// Decoration applied to the list price.
    pub text_decoration: TextDecoration,
    /// Flag to show, if any. `None` only for the default variant.
    pub flag: Option<Flag>,
}

impl DisplayVariant {
    /// Look up the presentation token for this variant.
    pub fn presentation(self) -> Presentation {
        match self {
            DisplayVariant::OnSale => Presentation {
                text_color: palette::GRAY_700,
                text_decoration: TextDecoration::LineThrough,
                flag: Some(Flag {
                    text: "Sale",
                    background: palette::FLAG_SALE,
                }),
            },
            DisplayVariant::NewRelease => Presentation {
                text_color: palette::GRAY_900,
                text_decoration: TextDecoration::None,
                flag: Some(Flag {
                    text: "Just Released!",
                    background: palette::FLAG_NEW_RELEASE,
                }),
            },
            DisplayVariant::Default => Presentation {
                text_color: palette::GRAY_900,
                text_decoration: TextDecoration::None,
                flag: None,
            },
        }
    }
}
