// Service exports
pub mod cache;
pub mod catalog;
pub mod postgres;

pub use cache::CatalogCache;
pub use catalog::{Catalog, CatalogError};
pub use postgres::{CatalogStats, FavoriteBreed, PostgresClient, PostgresError};
