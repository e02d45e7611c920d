// src/lib.rs

//! stock_core: the domain side of a small inventory service.
//!
//! The crate provides:
//!  - The `Product` record and its fixed `Category` set.
//!  - Transport DTOs, the lossless DTO/model mapper and explicit shape validation.
//!  - The `ProductStore` persistence contract and an in-memory implementation.
//!  - The `StockManager`, which enforces name uniqueness, existence checks and the
//!    minimum-stock guard on decrements.

pub mod dto;
pub mod error;
pub mod manager;
pub mod mapper;
pub mod model;
pub mod store;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::dto::{ProductDto, ProductPayload, QuantityDto, QuantityPayload};
pub use crate::error::{ProductKey, StockError, StockResult};
pub use crate::manager::StockManager;
pub use crate::mapper::{to_dto, to_model};
pub use crate::model::{Category, ParseCategoryError, Product, ProductId};
pub use crate::store::{InMemoryProductStore, ProductStore, StoreResult};
pub use crate::validation::{validate_product, validate_quantity, ValidationErrors};

/*
    Typical flow:
    1. The transport decodes a `ProductPayload` / `QuantityPayload` and runs
       `validate_product` / `validate_quantity` on it.
    2. A valid `ProductDto` is turned into a `Product` with `to_model`.
    3. The `StockManager` (built over an `Arc<dyn ProductStore>`) applies the operation.
    4. The stored `Product` goes back out through `to_dto`; a `StockError` is mapped
       to a status code by the transport.
*/
