// Service exports
pub mod catalog;

pub use catalog::{RecipeCatalog, CatalogError, load_recipes, load_users};
