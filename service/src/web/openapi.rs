// service/src/web/openapi.rs

//! OpenAPI description of the product API, served at `/api/v1/openapi.json`.

use crate::web::handlers::product_handlers;
use stock_core::{Category, ProductDto, QuantityDto};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
  info(title = "Stock Service", description = "Manages product stock"),
  paths(
    product_handlers::create_product_handler,
    product_handlers::get_product_handler,
    product_handlers::list_products_handler,
    product_handlers::delete_product_handler,
    product_handlers::decrement_stock_handler,
    product_handlers::increment_stock_handler,
  ),
  components(schemas(ProductDto, QuantityDto, Category)),
  tags((name = "products", description = "Product registration and stock management"))
)]
pub struct ApiDoc;
