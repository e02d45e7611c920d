// core/src/model/mod.rs

//! Storage-side representation of the inventory.

pub mod category;
pub mod product;

pub use category::{Category, ParseCategoryError};
pub use product::{Product, ProductId};
