// Service exports
pub mod catalog;

pub use catalog::{Catalog, CatalogError, DEFAULT_TOPIC_KEYWORDS};
