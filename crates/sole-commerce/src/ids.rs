//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different string-shaped
//! values, e.g. passing a display name where a navigation slug is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An opaque string identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ShoeId);
define_id!(Slug);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ShoeId::new("shoe-123");
        assert_eq!(id.as_str(), "shoe-123");
    }

    #[test]
    fn test_slug_from_str() {
        let slug: Slug = "tranquil-artisan".into();
        assert_eq!(slug.as_str(), "tranquil-artisan");
    }

    #[test]
    fn test_id_display() {
        let slug = Slug::new("dazzling-bubble");
        assert_eq!(format!("/shoe/{}", slug), "/shoe/dazzling-bubble");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ShoeId::new("same"), ShoeId::new("same"));
        assert_ne!(ShoeId::new("same"), ShoeId::new("different"));
    }
}
