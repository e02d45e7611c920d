// core/src/error.rs
use crate::model::ProductId;
use anyhow::Error as AnyhowError;
use std::fmt;
use thiserror::Error;

/// How a caller addressed a product: by its server-assigned id or by its unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
  Id(ProductId),
  Name(String),
}

impl fmt::Display for ProductKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProductKey::Id(id) => write!(f, "ID {}", id),
      ProductKey::Name(name) => write!(f, "name {}", name),
    }
  }
}

impl From<ProductId> for ProductKey {
  fn from(id: ProductId) -> Self {
    ProductKey::Id(id)
  }
}

impl From<&str> for ProductKey {
  fn from(name: &str) -> Self {
    ProductKey::Name(name.to_string())
  }
}

/// Domain-level failures surfaced by the `StockManager`.
///
/// Every variant except `Store` is a caller-recoverable condition; the transport
/// layer maps each one to a fixed HTTP status.
#[derive(Debug, Error)]
pub enum StockError {
  #[error("Product with name {0} already registered in the system.")]
  AlreadyRegistered(String),

  #[error("Product not found with {0}.")]
  NotFound(ProductKey),

  #[error("Product with ID {id}: decrement of {amount} exceeds the minimum stock capacity.")]
  StockExceeded { id: ProductId, amount: i32 },

  #[error("Product with ID {id}: adjustment by {amount} overflows the stored quantity.")]
  QuantityOverflow { id: ProductId, amount: i32 },

  #[error("Product store failure. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl StockError {
  pub fn not_found(key: impl Into<ProductKey>) -> Self {
    StockError::NotFound(key.into())
  }
}

// Store implementations report through anyhow; anything arriving that way is a collaborator failure.
impl From<AnyhowError> for StockError {
  fn from(err: AnyhowError) -> Self {
    StockError::Store { source: err }
  }
}

pub type StockResult<T, E = StockError> = std::result::Result<T, E>;
