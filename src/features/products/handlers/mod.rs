pub mod product_handler;

pub use product_handler::{
    __path_list_products, __path_product_feed, __path_search_products, list_products,
    product_feed, search_products,
};
