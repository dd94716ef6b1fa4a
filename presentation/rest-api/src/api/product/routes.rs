use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only endpoints over the storefront catalog. When the database is
/// empty or unavailable these serve a fixed set of sample products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product, most recently created first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> Json<Vec<ProductResponse>> {
        let products = self.get_all_use_case.execute().await;
        Json(products.into_iter().map(Into::into).collect())
    }

    /// Search products
    ///
    /// Case-insensitive substring match on name, description and category.
    /// A blank or missing query returns an empty list.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, q: Query<Option<String>>) -> Json<Vec<ProductResponse>> {
        let products = self
            .search_use_case
            .execute(SearchProductsParams {
                query: q.0.unwrap_or_default(),
            })
            .await;
        Json(products.into_iter().map(Into::into).collect())
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match ProductId::parse(id.0) {
            Ok(id) => id,
            Err(err) => return GetProductByIdResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Some(product) => GetProductByIdResponse::Ok(Json(product.into())),
            None => {
                let (_status, json) = ProductError::NotFound.into_error_response();
                GetProductByIdResponse::NotFound(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
