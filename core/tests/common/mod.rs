// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use stock_core::{Category, InMemoryProductStore, Product, ProductDto, ProductId, StockManager};
use std::sync::Arc;
use tracing::Level;

// --- Fixtures ---
pub const DEFAULT_NAME: &str = "Homem";
pub const DEFAULT_MINIMUM_STOCK: i32 = 2;
pub const DEFAULT_QUANTITY: i32 = 12;
pub const MISSING_ID: ProductId = 999;

pub fn sample_product() -> Product {
  Product::new(DEFAULT_NAME, DEFAULT_MINIMUM_STOCK, DEFAULT_QUANTITY, Category::Perfumery)
}

pub fn sample_dto() -> ProductDto {
  ProductDto {
    id: Some(1),
    name: DEFAULT_NAME.to_string(),
    minimum_stock: DEFAULT_MINIMUM_STOCK,
    quantity: DEFAULT_QUANTITY,
    category: Category::Perfumery,
  }
}

/// A manager over a fresh in-memory store; the store handle is returned so tests can
/// check what was (or was not) persisted.
pub fn manager() -> (StockManager, Arc<InMemoryProductStore>) {
  let store = Arc::new(InMemoryProductStore::new());
  (StockManager::new(store.clone()), store)
}

/// A manager holding `sample_product()`, plus the id it was stored under.
pub async fn manager_with_sample() -> (StockManager, Arc<InMemoryProductStore>, ProductId) {
  let (manager, store) = manager();
  let created = manager.create(sample_product()).await.expect("sample product should be created");
  let id = created.id.expect("created product should carry an id");
  (manager, store, id)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
