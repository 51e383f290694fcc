mod catalog;
mod dummyjson_client;

pub use catalog::ProductCatalog;
pub use dummyjson_client::DummyJsonClient;

#[cfg(test)]
mod stub_catalog;
#[cfg(test)]
pub use stub_catalog::StubCatalog;
