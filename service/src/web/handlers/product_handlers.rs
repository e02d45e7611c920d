// service/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use stock_core::{
  to_dto, to_model, validate_product, validate_quantity, ProductDto, ProductId, ProductPayload, QuantityDto,
  QuantityPayload,
};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[utoipa::path(
  post,
  path = "/api/v1/products",
  tag = "products",
  request_body = ProductDto,
  responses(
    (status = 201, description = "Success product created", body = ProductDto),
    (status = 400, description = "Missing required fields, wrong field range value or product already registered on system")
  )
)]
#[instrument(name = "handler::create_product", skip(app_state, req_payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let candidate = validate_product(&req_payload).map_err(|errors| {
    warn!(invalid_fields = %errors, "Product payload failed validation.");
    AppError::from(errors)
  })?;
  info!(name = %candidate.name, "Attempting to register product.");

  let created = app_state.stock_manager.create(to_model(candidate)).await?;

  info!(product_id = ?created.id, "Product registered successfully.");
  Ok(HttpResponse::Created().json(to_dto(created)))
}

#[utoipa::path(
  get,
  path = "/api/v1/products/{name}",
  tag = "products",
  params(("name" = String, Path, description = "Unique product name")),
  responses(
    (status = 200, description = "Success product found in the system", body = ProductDto),
    (status = 404, description = "Product with given name not found")
  )
)]
#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_name = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let name = path.into_inner();

  let product = app_state.stock_manager.find_by_name(&name).await?;

  info!("Product '{}' fetched successfully.", name);
  Ok(HttpResponse::Ok().json(to_dto(product)))
}

#[utoipa::path(
  get,
  path = "/api/v1/products",
  tag = "products",
  responses((status = 200, description = "List of all products registered in the system", body = [ProductDto]))
)]
#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products: Vec<ProductDto> = app_state
    .stock_manager
    .list_all()
    .await?
    .into_iter()
    .map(to_dto)
    .collect();

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[utoipa::path(
  delete,
  path = "/api/v1/products/{id}",
  tag = "products",
  params(("id" = i64, Path, description = "Product id")),
  responses(
    (status = 204, description = "Success product deleted in the system"),
    (status = 404, description = "Product with given id not found")
  )
)]
#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  app_state.stock_manager.delete_by_id(product_id).await?;

  info!("Product {} deleted.", product_id);
  Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
  patch,
  path = "/api/v1/products/{id}/decrement",
  tag = "products",
  params(("id" = i64, Path, description = "Product id")),
  request_body = QuantityDto,
  responses(
    (status = 200, description = "Success product stock decremented", body = ProductDto),
    (status = 400, description = "Invalid quantity or decrement exceeds the minimum stock capacity"),
    (status = 404, description = "Product with given id not found")
  )
)]
#[instrument(name = "handler::decrement_stock", skip(app_state, path, req_payload), fields(product_id = %path.as_ref()))]
pub async fn decrement_stock_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  req_payload: web::Json<QuantityPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let adjustment = validate_quantity(&req_payload)?;

  let updated = app_state
    .stock_manager
    .decrement(product_id, adjustment.quantity)
    .await?;

  info!(
    "Stock of product {} decremented by {}. New quantity: {}",
    product_id, adjustment.quantity, updated.quantity
  );
  Ok(HttpResponse::Ok().json(to_dto(updated)))
}

#[utoipa::path(
  patch,
  path = "/api/v1/products/{id}/increment",
  tag = "products",
  params(("id" = i64, Path, description = "Product id")),
  request_body = QuantityDto,
  responses(
    (status = 200, description = "Success product stock incremented", body = ProductDto),
    (status = 400, description = "Invalid quantity"),
    (status = 404, description = "Product with given id not found")
  )
)]
#[instrument(name = "handler::increment_stock", skip(app_state, path, req_payload), fields(product_id = %path.as_ref()))]
pub async fn increment_stock_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  req_payload: web::Json<QuantityPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let adjustment = validate_quantity(&req_payload)?;

  let updated = app_state
    .stock_manager
    .increment(product_id, adjustment.quantity)
    .await?;

  info!(
    "Stock of product {} incremented by {}. New quantity: {}",
    product_id, adjustment.quantity, updated.quantity
  );
  Ok(HttpResponse::Ok().json(to_dto(updated)))
}
