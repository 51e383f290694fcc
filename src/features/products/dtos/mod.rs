pub mod product_dto;

pub use product_dto::{
    ProductFeedDto, ProductFeedQuery, ProductPageDto, ProductPageQuery, ProductSearchDto,
    ProductSearchQuery,
};
