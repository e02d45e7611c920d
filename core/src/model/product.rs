// core/src/model/product.rs

use super::Category;

pub type ProductId = i64;

/// A product record as held by a `ProductStore`.
///
/// `id` is `None` until the store has persisted the record for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
  pub id: Option<ProductId>,
  pub name: String,
  pub minimum_stock: i32,
  pub quantity: i32,
  pub category: Category,
}

impl Product {
  pub fn new(name: impl Into<String>, minimum_stock: i32, quantity: i32, category: Category) -> Self {
    Self {
      id: None,
      name: name.into(),
      minimum_stock,
      quantity,
      category,
    }
  }

  pub fn with_id(mut self, id: ProductId) -> Self {
    self.id = Some(id);
    self
  }
}
