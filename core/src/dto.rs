// core/src/dto.rs

//! Transport-side shapes of a product, as exchanged with HTTP clients.

use crate::model::{Category, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product as seen by API clients. Also the output of a successful `validate_product`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[schema(value_type = Option<i64>, example = 1)]
  pub id: Option<ProductId>,
  #[schema(min_length = 1, max_length = 200, example = "Homem")]
  pub name: String,
  #[serde(alias = "min")]
  #[schema(maximum = 500, example = 2)]
  pub minimum_stock: i32,
  #[schema(maximum = 100, example = 12)]
  pub quantity: i32,
  #[serde(alias = "type")]
  pub category: Category,
}

/// Raw create body. Every field is optional so that missing fields are reported
/// by validation together with the other failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
  #[serde(default)]
  pub id: Option<ProductId>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, alias = "min")]
  pub minimum_stock: Option<i32>,
  #[serde(default)]
  pub quantity: Option<i32>,
  #[serde(default, alias = "type")]
  pub category: Option<Category>,
}

impl From<ProductDto> for ProductPayload {
  fn from(dto: ProductDto) -> Self {
    Self {
      id: dto.id,
      name: Some(dto.name),
      minimum_stock: Some(dto.minimum_stock),
      quantity: Some(dto.quantity),
      category: Some(dto.category),
    }
  }
}

/// Validated body of an increment/decrement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuantityDto {
  #[schema(minimum = 0, maximum = 100, example = 10)]
  pub quantity: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct QuantityPayload {
  #[serde(default)]
  pub quantity: Option<i32>,
}
