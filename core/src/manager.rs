// core/src/manager.rs

//! The `StockManager`: product registration, lookup, removal and stock adjustment.

use crate::error::{StockError, StockResult};
use crate::model::{Product, ProductId};
use crate::store::ProductStore;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Applies the inventory rules on top of a `ProductStore`.
///
/// Holds no mutable state of its own. Every adjustment is a read-modify-write
/// against the store; two concurrent adjustments of the same product are only as
/// safe as the store makes them.
///
/// Domain errors are returned to the caller as-is and are not logged here.
#[derive(Clone)]
pub struct StockManager {
  store: Arc<dyn ProductStore>,
}

impl StockManager {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }

  /// Registers a new product. Any id on the candidate is ignored; the store assigns one.
  #[instrument(name = "StockManager::create", skip(self, candidate), fields(name = %candidate.name))]
  pub async fn create(&self, mut candidate: Product) -> StockResult<Product> {
    self.verify_not_registered(&candidate.name).await?;

    candidate.id = None;
    let saved = self.store.save(candidate).await?;
    info!(product_id = ?saved.id, "Product registered.");
    Ok(saved)
  }

  #[instrument(name = "StockManager::find_by_name", skip(self))]
  pub async fn find_by_name(&self, name: &str) -> StockResult<Product> {
    self
      .store
      .find_by_name(name)
      .await?
      .ok_or_else(|| StockError::not_found(name))
  }

  #[instrument(name = "StockManager::find_by_id", skip(self))]
  pub async fn find_by_id(&self, id: ProductId) -> StockResult<Product> {
    self.verify_exists(id).await
  }

  /// All stored products in store order. An empty store yields an empty list.
  #[instrument(name = "StockManager::list_all", skip(self))]
  pub async fn list_all(&self) -> StockResult<Vec<Product>> {
    let products = self.store.find_all().await?;
    debug!(count = products.len(), "Listed products.");
    Ok(products)
  }

  #[instrument(name = "StockManager::delete_by_id", skip(self))]
  pub async fn delete_by_id(&self, id: ProductId) -> StockResult<()> {
    self.verify_exists(id).await?;
    self.store.delete_by_id(id).await?;
    info!("Product deleted.");
    Ok(())
  }

  /// Takes `amount` units out of stock.
  ///
  /// The guard compares `amount - quantity` against `minimum_stock`: the decrement
  /// is applied when that difference is at most the minimum, and rejected with
  /// `StockExceeded` otherwise. The stored quantity is left untouched on rejection.
  #[instrument(name = "StockManager::decrement", skip(self))]
  pub async fn decrement(&self, id: ProductId, amount: i32) -> StockResult<Product> {
    let mut product = self.verify_exists(id).await?;

    let delta = i64::from(amount) - i64::from(product.quantity);
    debug!(quantity = product.quantity, minimum_stock = product.minimum_stock, delta, "Checking minimum stock guard.");
    if delta > i64::from(product.minimum_stock) {
      return Err(StockError::StockExceeded { id, amount });
    }

    product.quantity = product
      .quantity
      .checked_sub(amount)
      .ok_or(StockError::QuantityOverflow { id, amount })?;
    let saved = self.store.save(product).await?;
    info!(quantity = saved.quantity, "Stock decremented.");
    Ok(saved)
  }

  /// Adds `amount` units to stock. No upper bound applies to the resulting quantity.
  #[instrument(name = "StockManager::increment", skip(self))]
  pub async fn increment(&self, id: ProductId, amount: i32) -> StockResult<Product> {
    let mut product = self.verify_exists(id).await?;

    product.quantity = product
      .quantity
      .checked_add(amount)
      .ok_or(StockError::QuantityOverflow { id, amount })?;
    let saved = self.store.save(product).await?;
    info!(quantity = saved.quantity, "Stock incremented.");
    Ok(saved)
  }

  async fn verify_not_registered(&self, name: &str) -> StockResult<()> {
    if self.store.find_by_name(name).await?.is_some() {
      return Err(StockError::AlreadyRegistered(name.to_string()));
    }
    Ok(())
  }

  async fn verify_exists(&self, id: ProductId) -> StockResult<Product> {
    self.store.find_by_id(id).await?.ok_or_else(|| StockError::not_found(id))
  }
}
