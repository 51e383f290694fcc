use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppQuery, ClientKey};
use crate::features::products::dtos::{
    ProductFeedDto, ProductFeedQuery, ProductPageDto, ProductPageQuery, ProductSearchDto,
    ProductSearchQuery,
};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta};

/// List products one numbered page at a time
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(ProductPageQuery),
    responses(
        (status = 200, description = "Requested page", body = ApiResponse<ProductPageDto>),
        (status = 400, description = "Invalid page number"),
        (status = 502, description = "Product catalog unavailable")
    )
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<ProductPageQuery>,
) -> Result<Json<ApiResponse<ProductPageDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let page = service.page(query.page).await?;
    let total = page.total as i64;

    Ok(Json(ApiResponse::success(
        Some(page),
        None,
        Some(Meta { total }),
    )))
}

/// Load the next batch of an infinite-scroll list
#[utoipa::path(
    get,
    path = "/api/products/feed",
    tag = "products",
    params(ProductFeedQuery),
    responses(
        (status = 200, description = "Next batch", body = ApiResponse<ProductFeedDto>),
        (status = 502, description = "Product catalog unavailable")
    )
)]
pub async fn product_feed(
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<ProductFeedQuery>,
) -> Result<Json<ApiResponse<ProductFeedDto>>> {
    let batch = service.feed(query.skip).await?;
    Ok(Json(ApiResponse::success(Some(batch), None, None)))
}

/// Search products, debounced per client
///
/// A search replaced by a newer one from the same client during the quiet
/// period is answered with 409 and never reaches the catalog.
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "products",
    params(ProductSearchQuery),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<ProductSearchDto>),
        (status = 409, description = "Superseded by a newer search"),
        (status = 502, description = "Product catalog unavailable")
    )
)]
pub async fn search_products(
    client: ClientKey,
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<ProductSearchQuery>,
) -> Result<Json<ApiResponse<ProductSearchDto>>> {
    let results = service.search(client.as_str(), &query.q).await?;
    let total = results.total as i64;

    Ok(Json(ApiResponse::success(
        Some(results),
        None,
        Some(Meta { total }),
    )))
}
