// core/src/model/category.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Product line a product belongs to. Serialized and stored as the upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
  Perfumery,
  Hair,
  Skin,
  Bath,
  Face,
}

impl Category {
  pub const ALL: [Category; 5] = [
    Category::Perfumery,
    Category::Hair,
    Category::Skin,
    Category::Bath,
    Category::Face,
  ];

  pub fn description(&self) -> &'static str {
    match self {
      Category::Perfumery => "Perfumes and deodorants",
      Category::Hair => "Shampoos and conditioners",
      Category::Skin => "Sunscreens and creams",
      Category::Bath => "Soaps",
      Category::Face => "Lipsticks and makeup",
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Perfumery => "PERFUMERY",
      Category::Hair => "HAIR",
      Category::Skin => "SKIN",
      Category::Bath => "BATH",
      Category::Face => "FACE",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown product category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
  type Err = ParseCategoryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL
      .iter()
      .copied()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| ParseCategoryError(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_only_upper_case_names() {
    assert_eq!("HAIR".parse::<Category>(), Ok(Category::Hair));
    assert_eq!(
      "hair".parse::<Category>(),
      Err(ParseCategoryError("hair".to_string()))
    );
    assert!("PERFUMARIA".parse::<Category>().is_err());
  }

  #[test]
  fn display_matches_wire_form() {
    for category in Category::ALL {
      let json = serde_json::to_string(&category).unwrap();
      assert_eq!(json, format!("\"{}\"", category));
      assert!(!category.description().is_empty());
    }
  }
}
