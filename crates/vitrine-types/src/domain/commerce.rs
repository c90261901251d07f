use serde::{Deserialize, Serialize};

use super::ids::{CartId, CartItemId, OrderId, OrderItemId, ProductId, UserId};

/// Shopping cart. `status` is the backend's free-text lifecycle code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub status: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    pub created_at: String,
}

/// `price_cents` is the recorded amount for the whole line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price_cents: i64,
    pub created_at: String,
}

impl Cart {
    pub fn total_amount_cents(&self) -> i64 {
        self.items.iter().map(|i| i.price_cents).sum()
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub order_number: String,
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price_cents: i64,
    pub created_at: String,
}

impl Order {
    pub fn total_amount_cents(&self) -> i64 {
        self.items.iter().map(|i| i.price_cents).sum()
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
