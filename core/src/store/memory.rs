// core/src/store/memory.rs

use super::{ProductStore, StoreResult};
use crate::model::{Product, ProductId};
use anyhow::bail;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
  products: BTreeMap<ProductId, Product>,
  last_id: ProductId,
}

/// Process-local `ProductStore`. Ids start at 1 and are never reused; `find_all` yields id order.
///
/// The lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
  inner: RwLock<Inner>,
}

impl InMemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.inner.read().products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  async fn save(&self, mut product: Product) -> StoreResult<Product> {
    let mut guard = self.inner.write();

    let name_taken = guard
      .products
      .values()
      .any(|existing| existing.name == product.name && existing.id != product.id);
    if name_taken {
      bail!("unique constraint violated: product name '{}' already stored", product.name);
    }

    let id = match product.id {
      Some(id) => {
        guard.last_id = guard.last_id.max(id);
        id
      }
      None => {
        guard.last_id += 1;
        guard.last_id
      }
    };
    product.id = Some(id);
    guard.products.insert(id, product.clone());
    debug!(product_id = id, "Product saved in memory.");
    Ok(product)
  }

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    Ok(self.inner.read().products.get(&id).cloned())
  }

  async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
    Ok(self.inner.read().products.values().find(|p| p.name == name).cloned())
  }

  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    Ok(self.inner.read().products.values().cloned().collect())
  }

  async fn delete_by_id(&self, id: ProductId) -> StoreResult<bool> {
    Ok(self.inner.write().products.remove(&id).is_some())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Category;

  #[tokio::test]
  async fn assigns_increasing_ids_and_keeps_them_on_update() {
    let store = InMemoryProductStore::new();
    let first = store.save(Product::new("Kaiak", 2, 12, Category::Perfumery)).await.unwrap();
    let second = store.save(Product::new("Ekos", 1, 5, Category::Bath)).await.unwrap();
    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));

    let mut changed = first.clone();
    changed.quantity = 30;
    let updated = store.save(changed).await.unwrap();
    assert_eq!(updated.id, Some(1));
    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_id(1).await.unwrap().unwrap().quantity, 30);
  }

  #[tokio::test]
  async fn rejects_a_second_record_with_the_same_name() {
    let store = InMemoryProductStore::new();
    store.save(Product::new("Kaiak", 2, 12, Category::Perfumery)).await.unwrap();
    let err = store
      .save(Product::new("Kaiak", 0, 1, Category::Face))
      .await
      .unwrap_err();
    assert!(err.to_string().contains("Kaiak"));
    assert_eq!(store.len(), 1);
  }

  #[tokio::test]
  async fn delete_reports_whether_anything_was_removed() {
    let store = InMemoryProductStore::new();
    let saved = store.save(Product::new("Tododia", 3, 9, Category::Skin)).await.unwrap();
    let id = saved.id.unwrap();
    assert!(store.delete_by_id(id).await.unwrap());
    assert!(!store.delete_by_id(id).await.unwrap());
    assert!(store.is_empty());
  }
}
