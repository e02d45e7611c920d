// service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use stock_core::{StockError, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(ValidationErrors),

  #[error("Malformed Request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Stock(#[from] StockError),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),
}

impl From<ValidationErrors> for AppError {
  fn from(errors: ValidationErrors) -> Self {
    AppError::Validation(errors)
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::Stock(stock_err) => match stock_err {
        StockError::AlreadyRegistered(_) => StatusCode::BAD_REQUEST,
        StockError::NotFound(_) => StatusCode::NOT_FOUND,
        StockError::StockExceeded { .. } => StatusCode::BAD_REQUEST,
        StockError::QuantityOverflow { .. } => StatusCode::BAD_REQUEST,
        StockError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
      },
      AppError::Config(_) | AppError::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with error");
    }

    let mut builder = HttpResponse::build(status);
    match self {
      AppError::Validation(errors) => builder.json(json!({"error": "Validation failed", "fields": errors})),
      AppError::BadRequest(m) => builder.json(json!({"error": m})),
      AppError::Stock(StockError::Store { source }) => {
        tracing::error!(store_error_source = ?source, "Product store error details");
        builder.json(json!({"error": "Product store operation failed"}))
      }
      AppError::Stock(stock_err) => builder.json(json!({"error": stock_err.to_string()})),
      AppError::Config(m) => builder.json(json!({"error": "Configuration issue", "detail": m})),
      AppError::Sqlx(_) => builder.json(json!({"error": "Database operation failed"})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
