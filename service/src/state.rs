// service/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use stock_core::{ProductStore, StockManager};

#[derive(Clone)]
pub struct AppState {
  pub stock_manager: StockManager,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>, config: Arc<AppConfig>) -> Self {
    Self {
      stock_manager: StockManager::new(store),
      config,
    }
  }
}
