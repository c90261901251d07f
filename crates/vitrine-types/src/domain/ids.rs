use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a transparent string identifier for one storefront entity.
///
/// Back-references between entities go through these identifiers instead of
/// embedded structures, so the model has no reference cycles.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
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

entity_id!(
    /// Customer account identifier
    UserId
);
entity_id!(AddressId);
entity_id!(
    /// Catalog product identifier
    ProductId
);
entity_id!(CategoryId);
entity_id!(PromotionId);
entity_id!(CartId);
entity_id!(CartItemId);
entity_id!(OrderId);
entity_id!(OrderItemId);
entity_id!(ReviewId);
