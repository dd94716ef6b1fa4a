//! Hard-coded sample products served when the store is empty or unreachable.
//!
//! Built once on first access and never mutated. Declaration order is the
//! order of every fallback result.

use chrono::Utc;
use once_cell::sync::Lazy;

use super::model::Product;
use super::value_objects::ProductId;
use crate::domain::shared::value_objects::UserId;

static SAMPLE_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(build_sample_products);

pub fn sample_products() -> &'static [Product] {
    &SAMPLE_PRODUCTS
}

/// Exact id lookup within the sample catalog.
pub fn find_sample_product(id: &ProductId) -> Option<&'static Product> {
    sample_products().iter().find(|product| &product.id == id)
}

/// Builds the catalog eagerly so the first request does not pay for it.
pub fn init_sample_catalog() {
    Lazy::force(&SAMPLE_PRODUCTS);
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    image_url: &str,
    category: &str,
    stock: u32,
    seller_id: &str,
) -> Product {
    let now = Utc::now();
    Product::from_repository(
        ProductId::from_repository(id),
        name.to_string(),
        description.to_string(),
        price,
        image_url.to_string(),
        category.to_string(),
        stock,
        UserId::new(seller_id),
        Vec::new(),
        now,
        now,
    )
}

fn build_sample_products() -> Vec<Product> {
    vec![
        sample(
            "sample-1",
            "Wireless Bluetooth Headphones",
            "High-quality wireless headphones with noise cancellation and long battery life. Perfect for music lovers and professionals.",
            89.99,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop",
            "Electronics",
            25,
            "seller-techstore",
        ),
        sample(
            "sample-2",
            "Organic Cotton T-Shirt",
            "Comfortable and sustainable organic cotton t-shirt. Available in multiple colors and sizes.",
            24.99,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500&h=500&fit=crop",
            "Clothing",
            50,
            "seller-ecofashion",
        ),
        sample(
            "sample-3",
            "Stainless Steel Water Bottle",
            "Durable stainless steel water bottle with vacuum insulation. Keeps drinks cold for 24 hours or hot for 12 hours.",
            19.99,
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=500&h=500&fit=crop",
            "Home & Garden",
            100,
            "seller-outdoorgear",
        ),
        sample(
            "sample-4",
            "Smart Fitness Watch",
            "Advanced fitness tracking watch with heart rate monitor, GPS, and smartphone connectivity.",
            199.99,
            "https://images.unsplash.com/photo-1544117519-31a4b719223d?w=500&h=500&fit=crop",
            "Electronics",
            15,
            "seller-techstore",
        ),
        sample(
            "sample-5",
            "Handcrafted Wooden Bowl",
            "Beautiful handcrafted wooden bowl made from sustainable materials. Perfect for serving or decoration.",
            45.00,
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500&h=500&fit=crop",
            "Home & Garden",
            8,
            "seller-artisancrafts",
        ),
        sample(
            "sample-6",
            "Premium Coffee Beans",
            "Single-origin premium coffee beans from sustainable farms. Rich flavor with notes of chocolate and caramel.",
            18.99,
            "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=500&h=500&fit=crop",
            "Food & Beverage",
            75,
            "seller-coffeeroasters",
        ),
        sample(
            "sample-7",
            "Non-Slip Yoga Mat",
            "Extra thick non-slip yoga mat with carrying strap. Ideal for yoga, pilates and floor workouts.",
            32.50,
            "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=500&h=500&fit=crop",
            "Sports & Outdoors",
            40,
            "seller-outdoorgear",
        ),
        sample(
            "sample-8",
            "Leather-Bound Notebook",
            "Refillable leather-bound notebook with 200 pages of acid-free paper. A timeless gift for writers.",
            27.00,
            "https://images.unsplash.com/photo-1531346878377-a5be20888e57?w=500&h=500&fit=crop",
            "Office Supplies",
            60,
            "seller-artisancrafts",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_contain_eight_products() {
        assert_eq!(sample_products().len(), 8);
    }

    #[test]
    fn should_have_unique_ids_in_declaration_order() {
        let ids: Vec<&str> = sample_products().iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<String> = (1..=8).map(|n| format!("sample-{n}")).collect();
        assert_eq!(ids, expected);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 8);
    }

    #[test]
    fn should_have_no_reviews_and_positive_prices() {
        for product in sample_products() {
            assert!(product.reviews.is_empty());
            assert!(product.price > 0.0);
        }
    }

    #[test]
    fn should_find_sample_product_by_exact_id() {
        let id = ProductId::from_repository("sample-1");
        let product = find_sample_product(&id).unwrap();
        assert_eq!(product.name, "Wireless Bluetooth Headphones");
    }

    #[test]
    fn should_not_find_unknown_sample_product() {
        assert!(find_sample_product(&ProductId::from_repository("nonexistent")).is_none());
        assert!(find_sample_product(&ProductId::from_repository("SAMPLE-1")).is_none());
    }

    #[test]
    fn should_return_same_instance_on_every_access() {
        init_sample_catalog();
        assert!(std::ptr::eq(sample_products(), sample_products()));
    }
}
