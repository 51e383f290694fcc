use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::products::models::Product;

/// Query parameters for the paginated listing
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct ProductPageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    #[param(minimum = 1)]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// Query parameters for the infinite-scroll feed
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductFeedQuery {
    /// Offset of the first product to return (default: 0)
    #[serde(default)]
    pub skip: u32,
}

/// Query parameters for the debounced search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductSearchQuery {
    /// Search term; blank returns no results
    #[serde(default)]
    pub q: String,
}

/// One page of products with page arithmetic already done
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageDto {
    pub products: Vec<Product>,
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// Next batch for an infinite-scroll list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeedDto {
    pub products: Vec<Product>,
    /// Offset to request next
    pub next_skip: u32,
    pub has_more: bool,
}

/// Search results for a settled query
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSearchDto {
    pub query: String,
    pub products: Vec<Product>,
    pub total: u32,
}
