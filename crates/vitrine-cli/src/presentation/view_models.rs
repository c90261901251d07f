use chrono::NaiveDate;
use serde::Serialize;
use vitrine_format::{BadgeStyle, StarRating};
use vitrine_types::PromotionPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    ToMajor,
    ToMinor,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionViewModel {
    pub direction: ConversionDirection,
    pub cents: i64,
    pub major: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    Long,
    Short,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateViewModel {
    pub input: String,
    pub style: DateStyle,
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeViewModel {
    pub status: String,
    pub known: bool,
    pub style: BadgeStyle,
    pub css_class: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StarsViewModel {
    pub rating: f64,
    pub stars: StarRating,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCardViewModel {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub producer: Option<String>,
    pub region: Option<String>,
    pub vintage: Option<i32>,
    pub alcohol: Option<f64>,
    pub volume_ml: u32,
    pub currency: String,
    pub base_price_cents: i64,
    pub current_price_cents: i64,
    pub discount_percentage: Option<u32>,
    pub stock: i64,
    pub in_stock: bool,
    pub average_rating: Option<f64>,
    pub review_count: usize,
    pub primary_category: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BasketKind {
    Order,
    Cart,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineViewModel {
    pub product_id: String,
    /// `None` when no catalog was given or the product is not in it
    pub product_name: Option<String>,
    pub quantity: u32,
    pub price_cents: i64,
}

/// Orders and carts share one summary layout
#[derive(Debug, Clone, Serialize)]
pub struct BasketSummaryViewModel {
    pub kind: BasketKind,
    pub reference: String,
    pub user_id: String,
    pub status: String,
    pub badge: BadgeStyle,
    pub created_at: String,
    pub currency: String,
    pub lines: Vec<LineViewModel>,
    pub total_amount_cents: i64,
    pub total_items: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromotionViewModel {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub discount_percentage: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reference_date: NaiveDate,
    pub phase: PromotionPhase,
    pub product_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub locale: String,
    pub currency: String,
    pub timezone: String,
    pub invalid_dates: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathViewModel {
    pub path: String,
}
