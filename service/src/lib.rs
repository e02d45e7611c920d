// service/src/lib.rs

//! HTTP transport and PostgreSQL persistence for the `stock_core` inventory domain.

pub mod config;
pub mod errors;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
