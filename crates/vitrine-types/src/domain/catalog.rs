use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ProductId, PromotionId};
use super::review::Review;

fn default_volume_ml() -> u32 {
    750
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// A wine listed in the catalog.
///
/// Prices are integer minor units (cents) in `currency`. `base_price_cents`
/// is the list price, `current_price_cents` what the customer pays today.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vintage: Option<i32>,
    /// Alcohol by volume, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<f64>,
    #[serde(default = "default_volume_ml")]
    pub volume_ml: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub base_price_cents: i64,
    pub current_price_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub product_categories: Vec<ProductCategory>,
    #[serde(default)]
    pub product_promotions: Vec<ProductPromotion>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub created_at: String,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn is_discounted(&self) -> bool {
        self.current_price_cents < self.base_price_cents
    }

    /// Whole percent off the base price, rounded half up.
    ///
    /// `None` when the product sells at (or above) its base price.
    pub fn discount_percentage(&self) -> Option<u32> {
        if !self.is_discounted() || self.base_price_cents <= 0 {
            return None;
        }
        let off = self.base_price_cents - self.current_price_cents;
        let pct = (off * 100 + self.base_price_cents / 2) / self.base_price_cents;
        u32::try_from(pct).ok()
    }

    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: f64 = self.reviews.iter().map(|r| r.rating).sum();
        Some(sum / self.reviews.len() as f64)
    }

    pub fn primary_category_id(&self) -> Option<&CategoryId> {
        self.product_categories
            .iter()
            .find(|pc| pc.is_primary)
            .map(|pc| &pc.category_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub product_categories: Vec<ProductCategory>,
    pub created_at: String,
}

/// Membership of a product in a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: String,
    pub product_id: ProductId,
    pub category_id: CategoryId,
    pub date_added: String,
    #[serde(default)]
    pub is_primary: bool,
    pub created_at: String,
}

/// Where a date falls relative to a promotion window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionPhase {
    Upcoming,
    Active,
    Expired,
}

/// Phase of `date` within the inclusive window `[start, end]`
fn phase_in_window(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> PromotionPhase {
    if date < start {
        PromotionPhase::Upcoming
    } else if date > end {
        PromotionPhase::Expired
    } else {
        PromotionPhase::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: PromotionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub product_promotions: Vec<ProductPromotion>,
    pub created_at: String,
}

impl Promotion {
    pub fn phase_on(&self, date: NaiveDate) -> PromotionPhase {
        phase_in_window(date, self.start_date, self.end_date)
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.phase_on(date) == PromotionPhase::Active
    }

    pub fn is_upcoming_on(&self, date: NaiveDate) -> bool {
        self.phase_on(date) == PromotionPhase::Upcoming
    }

    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.phase_on(date) == PromotionPhase::Expired
    }
}

/// Attachment of a promotion to one product, optionally narrowing the window
/// or overriding the discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPromotion {
    pub id: String,
    pub product_id: ProductId,
    pub promotion_id: PromotionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_discount: Option<f64>,
    pub created_at: String,
}

impl ProductPromotion {
    pub fn effective_discount(&self, promotion: &Promotion) -> Option<f64> {
        self.specific_discount.or(promotion.discount_percentage)
    }

    /// Own dates take precedence; missing ends fall back to the promotion's.
    pub fn phase_on(&self, promotion: &Promotion, date: NaiveDate) -> PromotionPhase {
        let start = self.start_date.unwrap_or(promotion.start_date);
        let end = self.end_date.unwrap_or(promotion.end_date);
        phase_in_window(date, start, end)
    }

    pub fn is_active_on(&self, promotion: &Promotion, date: NaiveDate) -> bool {
        self.phase_on(promotion, date) == PromotionPhase::Active
    }
}
