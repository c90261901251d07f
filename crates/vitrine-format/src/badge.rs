use serde::Serialize;
use std::fmt;

/// Status codes the storefront knows how to style.
///
/// Order, cart and account statuses share one table; matching is exact after
/// an upper-case fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKey {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
    Active,
    Inactive,
}

impl StatusKey {
    pub const ALL: [StatusKey; 9] = [
        StatusKey::Pending,
        StatusKey::Confirmed,
        StatusKey::Processing,
        StatusKey::Shipped,
        StatusKey::Delivered,
        StatusKey::Cancelled,
        StatusKey::Refunded,
        StatusKey::Active,
        StatusKey::Inactive,
    ];

    pub fn parse(status: &str) -> Option<Self> {
        let normalized = status.to_uppercase();
        Self::ALL
            .iter()
            .find(|key| key.as_str() == normalized)
            .copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::Pending => "PENDING",
            StatusKey::Confirmed => "CONFIRMED",
            StatusKey::Processing => "PROCESSING",
            StatusKey::Shipped => "SHIPPED",
            StatusKey::Delivered => "DELIVERED",
            StatusKey::Cancelled => "CANCELLED",
            StatusKey::Refunded => "REFUNDED",
            StatusKey::Active => "ACTIVE",
            StatusKey::Inactive => "INACTIVE",
        }
    }

    pub fn style(&self) -> BadgeStyle {
        match self {
            StatusKey::Pending => BadgeStyle::Yellow,
            StatusKey::Confirmed => BadgeStyle::Blue,
            StatusKey::Processing => BadgeStyle::Indigo,
            StatusKey::Shipped => BadgeStyle::Purple,
            StatusKey::Delivered | StatusKey::Active => BadgeStyle::Green,
            StatusKey::Cancelled | StatusKey::Inactive => BadgeStyle::Red,
            StatusKey::Refunded => BadgeStyle::Gray,
        }
    }
}

/// Visual treatment of a status badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Yellow,
    Blue,
    Indigo,
    Purple,
    Green,
    Red,
    #[default]
    Gray,
}

impl BadgeStyle {
    /// Style given to any status outside the known table
    pub const NEUTRAL: BadgeStyle = BadgeStyle::Gray;

    pub fn name(&self) -> &'static str {
        match self {
            BadgeStyle::Yellow => "yellow",
            BadgeStyle::Blue => "blue",
            BadgeStyle::Indigo => "indigo",
            BadgeStyle::Purple => "purple",
            BadgeStyle::Green => "green",
            BadgeStyle::Red => "red",
            BadgeStyle::Gray => "gray",
        }
    }

    /// Tailwind classes for the badge background and text
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeStyle::Yellow => "bg-yellow-100 text-yellow-800",
            BadgeStyle::Blue => "bg-blue-100 text-blue-800",
            BadgeStyle::Indigo => "bg-indigo-100 text-indigo-800",
            BadgeStyle::Purple => "bg-purple-100 text-purple-800",
            BadgeStyle::Green => "bg-green-100 text-green-800",
            BadgeStyle::Red => "bg-red-100 text-red-800",
            BadgeStyle::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Style token for a free-text status. Never fails.
pub fn status_badge(status: &str) -> BadgeStyle {
    match StatusKey::parse(status) {
        Some(key) => key.style(),
        None => {
            tracing::trace!(status, "unknown status, using neutral badge");
            BadgeStyle::NEUTRAL
        }
    }
}

pub fn status_badge_class(status: &str) -> &'static str {
    status_badge(status).css_class()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(status_badge("delivered"), status_badge("DELIVERED"));
        assert_eq!(status_badge("Shipped"), BadgeStyle::Purple);
        assert_eq!(status_badge_class("pending"), "bg-yellow-100 text-yellow-800");
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        assert_eq!(status_badge("UNKNOWN_STATUS"), BadgeStyle::NEUTRAL);
        assert_eq!(status_badge(""), BadgeStyle::NEUTRAL);
        assert_eq!(status_badge_class("SUSPENDED"), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_refunded_is_known_but_shares_gray() {
        assert_eq!(StatusKey::parse("refunded"), Some(StatusKey::Refunded));
        assert_eq!(status_badge("refunded"), BadgeStyle::Gray);
        assert_eq!(status_badge("refunded"), BadgeStyle::NEUTRAL);
    }

    #[test]
    fn test_shared_tokens() {
        assert_eq!(status_badge("delivered"), status_badge("active"));
        assert_eq!(status_badge("cancelled"), status_badge("inactive"));
        assert_eq!(status_badge("active"), BadgeStyle::Green);
        assert_eq!(status_badge("inactive"), BadgeStyle::Red);
    }

    #[test]
    fn test_no_partial_matching() {
        assert_eq!(StatusKey::parse(" delivered"), None);
        assert_eq!(StatusKey::parse("DELIVER"), None);
        assert_eq!(StatusKey::parse("canceled"), None);
    }

    #[test]
    fn test_every_key_round_trips() {
        for key in StatusKey::ALL {
            assert_eq!(StatusKey::parse(&key.as_str().to_lowercase()), Some(key));
        }
    }
}
