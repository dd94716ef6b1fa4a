use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductId, SearchQuery};

use super::entity::{ProductEntity, ReviewEntity, assemble_products};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_reviews(
        &self,
        products: Vec<ProductEntity>,
    ) -> Result<Vec<Product>, RepositoryError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
        let reviews = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, rating, comment, user_id, product_id, created_at, updated_at FROM reviews WHERE product_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        assemble_products(products, reviews)
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "product query failed");
    RepositoryError::DatabaseError
}

/// `ILIKE` pattern matching `term` anywhere, with LIKE wildcards taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all_newest_first(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, image_url, category, stock, seller_id, created_at, updated_at FROM products ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        self.with_reviews(entities).await
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, image_url, category, stock, seller_id, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        let Some(entity) = entity else {
            return Ok(None);
        };

        Ok(self.with_reviews(vec![entity]).await?.into_iter().next())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT id, name, description, price, image_url, category, stock, seller_id, created_at, updated_at
            FROM products
            WHERE name ILIKE $1 OR description ILIKE $1 OR category ILIKE $1
            ORDER BY created_at DESC"#,
        )
        .bind(contains_pattern(query.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        self.with_reviews(entities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_term_in_wildcards() {
        assert_eq!(contains_pattern("phone"), "%phone%");
    }

    #[test]
    fn should_escape_like_wildcards() {
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("t_shirt"), "%t\\_shirt%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn should_keep_other_characters_untouched() {
        assert_eq!(contains_pattern("Home & Garden"), "%Home & Garden%");
    }
}
