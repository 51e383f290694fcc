mod product_service;
mod search_debouncer;

pub use product_service::ProductService;
pub use search_debouncer::SearchDebouncer;
