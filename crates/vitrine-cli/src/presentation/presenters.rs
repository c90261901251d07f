use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;
use vitrine_format::{InvalidDatePolicy, StatusKey, major_to_minor, minor_to_major, star_rating, status_badge};
use vitrine_types::{Cart, Order, Product, ProductId, Promotion};

use super::view_models::{
    BadgeViewModel, BasketKind, BasketSummaryViewModel, ConfigInitViewModel, ConfigViewModel,
    ConversionDirection, ConversionViewModel, LineViewModel, ProductCardViewModel,
    PromotionViewModel, StarsViewModel,
};
use crate::config::Config;

/// Product names keyed by id, built from an optional catalog file
pub type Catalog = HashMap<ProductId, Product>;

pub fn present_to_major(cents: i64) -> ConversionViewModel {
    ConversionViewModel {
        direction: ConversionDirection::ToMajor,
        cents,
        major: minor_to_major(cents),
    }
}

pub fn present_to_minor(amount: f64) -> ConversionViewModel {
    ConversionViewModel {
        direction: ConversionDirection::ToMinor,
        cents: major_to_minor(amount),
        major: amount,
    }
}

pub fn present_badge(status: &str) -> BadgeViewModel {
    let style = status_badge(status);
    BadgeViewModel {
        status: status.to_string(),
        known: StatusKey::parse(status).is_some(),
        style,
        css_class: style.css_class(),
    }
}

pub fn present_stars(rating: f64) -> StarsViewModel {
    StarsViewModel {
        rating,
        stars: star_rating(rating),
    }
}

pub fn present_product(product: &Product) -> ProductCardViewModel {
    ProductCardViewModel {
        id: product.id.to_string(),
        name: product.name.clone(),
        sku: product.sku.clone(),
        producer: product.producer.clone(),
        region: product.region.clone(),
        vintage: product.vintage,
        alcohol: product.alcohol,
        volume_ml: product.volume_ml,
        currency: product.currency.clone(),
        base_price_cents: product.base_price_cents,
        current_price_cents: product.current_price_cents,
        discount_percentage: product.discount_percentage(),
        stock: product.stock,
        in_stock: product.in_stock(),
        average_rating: product.average_rating(),
        review_count: product.reviews.len(),
        primary_category: product.primary_category_id().map(|c| c.to_string()),
        created_at: product.created_at.clone(),
    }
}

fn line(product_id: &ProductId, quantity: u32, price_cents: i64, catalog: &Catalog) -> LineViewModel {
    LineViewModel {
        product_id: product_id.to_string(),
        product_name: catalog.get(product_id).map(|p| p.name.clone()),
        quantity,
        price_cents,
    }
}

pub fn present_order(order: &Order, catalog: &Catalog, currency: &str) -> BasketSummaryViewModel {
    BasketSummaryViewModel {
        kind: BasketKind::Order,
        reference: order.order_number.clone(),
        user_id: order.user_id.to_string(),
        status: order.status.clone(),
        badge: status_badge(&order.status),
        created_at: order.created_at.clone(),
        currency: currency.to_string(),
        lines: order
            .items
            .iter()
            .map(|i| line(&i.product_id, i.quantity, i.price_cents, catalog))
            .collect(),
        total_amount_cents: order.total_amount_cents(),
        total_items: order.total_items(),
    }
}

pub fn present_cart(cart: &Cart, catalog: &Catalog, currency: &str) -> BasketSummaryViewModel {
    BasketSummaryViewModel {
        kind: BasketKind::Cart,
        reference: cart.id.to_string(),
        user_id: cart.user_id.to_string(),
        status: cart.status.clone(),
        badge: status_badge(&cart.status),
        created_at: cart.created_at.clone(),
        currency: currency.to_string(),
        lines: cart
            .items
            .iter()
            .map(|i| line(&i.product_id, i.quantity, i.price_cents, catalog))
            .collect(),
        total_amount_cents: cart.total_amount_cents(),
        total_items: cart.total_items(),
    }
}

pub fn present_promotion(promotion: &Promotion, on: NaiveDate) -> PromotionViewModel {
    PromotionViewModel {
        id: promotion.id.to_string(),
        title: promotion.title.clone(),
        description: promotion.description.clone(),
        discount_percentage: promotion.discount_percentage,
        start_date: promotion.start_date,
        end_date: promotion.end_date,
        reference_date: on,
        phase: promotion.phase_on(on),
        product_count: promotion.product_promotions.len(),
    }
}

pub fn present_config(config: &Config, path: &Path) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
        locale: config.locale.to_string(),
        currency: config.currency.clone(),
        timezone: config.timezone.to_string(),
        invalid_dates: match config.invalid_dates {
            InvalidDatePolicy::Placeholder => "placeholder".to_string(),
            InvalidDatePolicy::Strict => "strict".to_string(),
        },
    }
}

pub fn present_config_init(path: &Path, overwritten: bool) -> ConfigInitViewModel {
    ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    }
}
