use chrono::{DateTime, Utc};

use super::value_objects::ProductId;
use crate::domain::shared::value_objects::UserId;

/// Comment shown for reviews stored without one.
pub const NO_COMMENT: &str = "no comment";

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub rating: i32,
    pub comment: String,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Constructor for data already persisted in the repository.
    /// A missing comment is normalized to [`NO_COMMENT`].
    pub fn from_repository(
        id: String,
        rating: i32,
        comment: Option<String>,
        user_id: UserId,
        product_id: ProductId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            rating,
            comment: comment.unwrap_or_else(|| NO_COMMENT.to_string()),
            user_id,
            product_id,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub stock: u32,
    pub seller_id: UserId,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        price: f64,
        image_url: String,
        category: String,
        stock: u32,
        seller_id: UserId,
        reviews: Vec<Review>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image_url,
            category,
            stock,
            seller_id,
            reviews,
            created_at,
            updated_at,
        }
    }

    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: i64 = self.reviews.iter().map(|r| i64::from(r.rating)).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}
