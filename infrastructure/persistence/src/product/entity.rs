use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, Review};
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub category: String,
    pub stock: i32,
    pub seller_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct ReviewEntity {
    pub id: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub user_id: String,
    pub product_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewEntity {
    pub fn into_domain(self) -> Review {
        Review::from_repository(
            self.id,
            self.rating,
            self.comment,
            UserId::new(self.user_id),
            ProductId::from_repository(self.product_id),
            self.created_at,
            self.updated_at,
        )
    }
}

impl ProductEntity {
    /// Fails when the stored price or stock cannot be represented in the domain model.
    pub fn into_domain(self, reviews: Vec<Review>) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or(RepositoryError::Persistence)?;
        let stock = u32::try_from(self.stock).map_err(|_| RepositoryError::Persistence)?;

        Ok(Product::from_repository(
            ProductId::from_repository(self.id),
            self.name,
            self.description,
            price,
            self.image_url,
            self.category,
            stock,
            UserId::new(self.seller_id),
            reviews,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Attaches each review to its product, keeping product order and review order.
pub fn assemble_products(
    products: Vec<ProductEntity>,
    reviews: Vec<ReviewEntity>,
) -> Result<Vec<Product>, RepositoryError> {
    let mut by_product: HashMap<String, Vec<Review>> = HashMap::new();
    for review in reviews {
        by_product
            .entry(review.product_id.clone())
            .or_default()
            .push(review.into_domain());
    }

    products
        .into_iter()
        .map(|product| {
            let reviews = by_product.remove(&product.id).unwrap_or_default();
            product.into_domain(reviews)
        })
        .collect()
}
