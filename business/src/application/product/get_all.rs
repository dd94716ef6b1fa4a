use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::fallback::prefer_store;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::sample_catalog::sample_products;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Vec<Product> {
        self.logger.info("Fetching all products");
        let products = prefer_store(
            "get_all_products",
            self.logger.as_ref(),
            self.repository.find_all_newest_first(),
            || sample_products().to_vec(),
        )
        .await;
        self.logger
            .info(&format!("Found {} products", products.len()));
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::{ProductId, SearchQuery};
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_all_newest_first(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn search(&self, query: &SearchQuery) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_product(id: &str, name: &str, price: f64) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::from_repository(id),
            name.to_string(),
            String::new(),
            price,
            String::new(),
            "Electronics".to_string(),
            3,
            UserId::new("seller-1"),
            vec![],
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_return_products_from_store_when_available() {
        let stored = vec![
            stored_product("1", "Product 1", 29.99),
            stored_product("2", "Product 2", 39.99),
        ];
        let expected = stored.clone();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_all_newest_first()
            .times(1)
            .returning(move || Ok(stored.clone()));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await;

        assert_eq!(products, expected);
    }

    #[tokio::test]
    async fn should_return_sample_products_when_store_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_all_newest_first()
            .returning(|| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await;

        assert_eq!(products.len(), 8);
        assert_eq!(products, sample_products().to_vec());
    }

    #[tokio::test]
    async fn should_return_sample_products_when_store_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_all_newest_first()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await;

        assert_eq!(products, sample_products().to_vec());
    }

    #[tokio::test]
    async fn should_return_equal_results_on_repeated_calls() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_all_newest_first()
            .times(2)
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case.execute().await;
        let second = use_case.execute().await;

        assert_eq!(first, second);
    }
}
