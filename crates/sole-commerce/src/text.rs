//! Small display-text helpers.

/// Pluralize a word with its count, e.g. `"1 Color"` / `"3 Colors"`.
///
/// Naive English pluralization (appends "s"), which is all the storefront
/// copy needs.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        format!("1 {}", word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_one() {
        assert_eq!(pluralize("Color", 1), "1 Color");
    }

    #[test]
    fn test_pluralize_many() {
        assert_eq!(pluralize("Color", 3), "3 Colors");
    }

    #[test]
    fn test_pluralize_zero() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
    }
}
