// core/src/store/mod.rs

//! The persistence contract the `StockManager` depends on, plus an in-memory implementation.

use crate::model::{Product, ProductId};
use async_trait::async_trait;

pub mod memory;

pub use memory::InMemoryProductStore;

pub type StoreResult<T> = anyhow::Result<T>;

/// Durable product storage keyed by id, with a unique secondary lookup by name.
///
/// Implementations own id assignment and their own transaction/locking discipline;
/// the `StockManager` performs plain read-modify-write cycles on top of them.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Inserts the product when `id` is `None` (assigning one), otherwise replaces the stored record.
  async fn save(&self, product: Product) -> StoreResult<Product>;

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

  async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>>;

  async fn find_all(&self) -> StoreResult<Vec<Product>>;

  /// Returns whether a record was removed.
  async fn delete_by_id(&self, id: ProductId) -> StoreResult<bool>;
}
