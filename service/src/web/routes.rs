// service/src/web/routes.rs

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::product_handlers;
use crate::web::openapi::ApiDoc;
use actix_web::web;
use utoipa::OpenApi;

// Reports which store backs the running instance alongside liveness.
async fn health_check_handler(app_state: web::Data<AppState>) -> actix_web::HttpResponse {
  let store = if app_state.config.database_url.is_some() {
    "postgres"
  } else {
    "memory"
  };
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "store": store }))
}

async fn openapi_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Malformed JSON bodies (including unknown category names) become 400 responses
/// with the same `{"error": ...}` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

// Called in `main.rs` (and by the API tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .route("/openapi.json", web::get().to(openapi_handler))
      .service(
        web::scope("/products")
          .service(
            web::resource("")
              .route(web::get().to(product_handlers::list_products_handler))
              .route(web::post().to(product_handlers::create_product_handler)),
          )
          // GET addresses a product by name, DELETE by id; both share the single-segment path.
          .service(
            web::resource("/{key}")
              .route(web::get().to(product_handlers::get_product_handler))
              .route(web::delete().to(product_handlers::delete_product_handler)),
          )
          .route(
            "/{id}/decrement",
            web::patch().to(product_handlers::decrement_stock_handler),
          )
          .route(
            "/{id}/increment",
            web::patch().to(product_handlers::increment_stock_handler),
          ),
      ),
  );
}
