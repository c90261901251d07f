use serde::{Deserialize, Serialize};

use super::ids::{ProductId, ReviewId, UserId};

/// Customer review. The backend constrains `rating` to 1..=5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String,
}
