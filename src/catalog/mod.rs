pub mod filter;
pub mod store;

pub use filter::{apply_filter, derive_suppliers, SupplierFilter, ALL_SENTINEL};
pub use store::CatalogStore;
