// core/src/mapper.rs

//! Conversion between the transport `ProductDto` and the stored `Product`.
//! Both directions copy every field, so `to_model(to_dto(p)) == p` and `to_dto(to_model(d)) == d`.

use crate::dto::ProductDto;
use crate::model::Product;

pub fn to_model(dto: ProductDto) -> Product {
  Product {
    id: dto.id,
    name: dto.name,
    minimum_stock: dto.minimum_stock,
    quantity: dto.quantity,
    category: dto.category,
  }
}

pub fn to_dto(product: Product) -> ProductDto {
  ProductDto {
    id: product.id,
    name: product.name,
    minimum_stock: product.minimum_stock,
    quantity: product.quantity,
    category: product.category,
  }
}

impl From<ProductDto> for Product {
  fn from(dto: ProductDto) -> Self {
    to_model(dto)
  }
}

impl From<Product> for ProductDto {
  fn from(product: Product) -> Self {
    to_dto(product)
  }
}
