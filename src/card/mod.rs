pub mod database;
pub mod types;

pub use database::{CardCatalog, CatalogError};
pub use types::{Attribute, Card, ATTRIBUTES};
