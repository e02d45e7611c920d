// core/src/validation.rs

//! Shape checks run by the transport layer before the `StockManager` is invoked.

use crate::dto::{ProductDto, ProductPayload, QuantityDto, QuantityPayload};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 1;
pub const NAME_MAX_CHARS: usize = 200;
pub const MINIMUM_STOCK_MAX: i32 = 500;
pub const QUANTITY_MAX: i32 = 100;

/// Every field that failed validation, with one or more messages per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", join_messages(.fields))]
pub struct ValidationErrors {
  fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, field: &str, message: impl Into<String>) {
    self.fields.entry(field.to_string()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn has_field(&self, field: &str) -> bool {
    self.fields.contains_key(field)
  }

  pub fn field(&self, field: &str) -> &[String] {
    self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn fields(&self) -> impl Iterator<Item = &str> {
    self.fields.keys().map(String::as_str)
  }
}

fn join_messages(fields: &BTreeMap<String, Vec<String>>) -> String {
  fields
    .iter()
    .flat_map(|(field, messages)| messages.iter().map(move |message| format!("{}: {}", field, message)))
    .collect::<Vec<_>>()
    .join("; ")
}

fn required<'a, T>(errors: &mut ValidationErrors, field: &str, value: &'a Option<T>) -> Option<&'a T> {
  if value.is_none() {
    errors.add(field, "must not be null");
  }
  value.as_ref()
}

fn at_most(errors: &mut ValidationErrors, field: &str, value: i32, max: i32) {
  if value > max {
    errors.add(field, format!("must be less than or equal to {}", max));
  }
}

/// Checks a create body: name 1..=200 characters, minimumStock <= 500, quantity <= 100,
/// category present. Only upper bounds apply to the numeric fields.
pub fn validate_product(payload: &ProductPayload) -> Result<ProductDto, ValidationErrors> {
  let mut errors = ValidationErrors::new();

  if let Some(name) = required(&mut errors, "name", &payload.name) {
    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
      errors.add(
        "name",
        format!("size must be between {} and {}", NAME_MIN_CHARS, NAME_MAX_CHARS),
      );
    }
  }
  if let Some(&minimum_stock) = required(&mut errors, "minimumStock", &payload.minimum_stock) {
    at_most(&mut errors, "minimumStock", minimum_stock, MINIMUM_STOCK_MAX);
  }
  if let Some(&quantity) = required(&mut errors, "quantity", &payload.quantity) {
    at_most(&mut errors, "quantity", quantity, QUANTITY_MAX);
  }
  required(&mut errors, "category", &payload.category);

  match (&payload.name, payload.minimum_stock, payload.quantity, payload.category) {
    (Some(name), Some(minimum_stock), Some(quantity), Some(category)) if errors.is_empty() => Ok(ProductDto {
      id: payload.id,
      name: name.clone(),
      minimum_stock,
      quantity,
      category,
    }),
    _ => Err(errors),
  }
}

/// Checks an increment/decrement body: quantity present and within 0..=100.
pub fn validate_quantity(payload: &QuantityPayload) -> Result<QuantityDto, ValidationErrors> {
  let mut errors = ValidationErrors::new();

  if let Some(&quantity) = required(&mut errors, "quantity", &payload.quantity) {
    if quantity < 0 {
      errors.add("quantity", "must be greater than or equal to 0");
    }
    at_most(&mut errors, "quantity", quantity, QUANTITY_MAX);
  }

  match payload.quantity {
    Some(quantity) if errors.is_empty() => Ok(QuantityDto { quantity }),
    _ => Err(errors),
  }
}
