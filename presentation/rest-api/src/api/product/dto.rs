use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{Product, Review};

#[derive(Debug, Clone, Object)]
pub struct ReviewResponse {
    /// Review unique identifier
    pub id: String,
    /// Star rating given by the reviewer
    pub rating: i32,
    /// Review text, "no comment" when the reviewer left none
    pub comment: String,
    /// Reviewer identifier
    pub user_id: String,
    /// Reviewed product identifier
    pub product_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            comment: review.comment,
            user_id: review.user_id.to_string(),
            product_id: review.product_id.to_string(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price in USD
    pub price: f64,
    /// Product image URL
    pub image_url: String,
    /// Free-text category label
    pub category: String,
    /// Units available
    pub stock: u32,
    /// Whether at least one unit is available
    pub in_stock: bool,
    /// Selling user identifier
    pub seller_id: String,
    /// Reviews, oldest first
    pub reviews: Vec<ReviewResponse>,
    /// Mean review rating, absent when there are no reviews
    #[oai(skip_serializing_if_is_none)]
    pub average_rating: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let average_rating = product.average_rating();
        let in_stock = product.is_in_stock();
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            stock: product.stock,
            in_stock,
            seller_id: product.seller_id.to_string(),
            reviews: product.reviews.into_iter().map(Into::into).collect(),
            average_rating,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
