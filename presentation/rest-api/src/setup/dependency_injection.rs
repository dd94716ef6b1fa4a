use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(ProductRepositoryPostgres::new(pool));
        Self::with_repository(product_repository)
    }

    /// Wires the catalog use cases around any repository implementation.
    pub fn with_repository(product_repository: Arc<dyn ProductRepository>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
