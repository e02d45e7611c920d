// service/src/store/mod.rs

//! Product store backends owned by the service.

pub mod postgres;

pub use postgres::PgProductStore;

use crate::config::AppConfig;
use crate::errors::Result;
use std::sync::Arc;
use stock_core::{InMemoryProductStore, ProductStore};

/// Picks the store from configuration: PostgreSQL when `DATABASE_URL` is set,
/// otherwise a process-local in-memory store.
pub async fn build_store(config: &AppConfig) -> Result<Arc<dyn ProductStore>> {
  match config.database_url.as_deref() {
    Some(database_url) => {
      let store = PgProductStore::connect(database_url, config.db_max_connections).await?;
      Ok(Arc::new(store))
    }
    None => {
      tracing::warn!("DATABASE_URL is not set; products are kept in memory and lost on shutdown.");
      Ok(Arc::new(InMemoryProductStore::new()))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::AppError;

  fn config_with(database_url: Option<&str>) -> AppConfig {
    let database_url = database_url.map(str::to_string);
    AppConfig::from_lookup(|name| match name {
      "DATABASE_URL" => database_url.clone(),
      _ => None,
    })
    .expect("config")
  }

  #[actix_web::test]
  async fn missing_database_url_selects_memory_store() {
    let store = build_store(&config_with(None)).await.unwrap();
    assert!(store.find_all().await.unwrap().is_empty());
  }

  #[actix_web::test]
  async fn unusable_database_url_is_a_database_error() {
    match build_store(&config_with(Some("not-a-database-url"))).await {
      Err(AppError::Sqlx(_)) => {}
      Err(other) => panic!("Expected AppError::Sqlx, got {:?}", other),
      Ok(_) => panic!("Expected AppError::Sqlx, got a store"),
    }
  }
}
