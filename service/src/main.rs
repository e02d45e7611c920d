// service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use stock_service::store::build_store;
use stock_service::telemetry::init_tracing;
use stock_service::{web, AppConfig, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Load application configuration before tracing so LOG_JSON can pick the format.
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };
  init_tracing(app_config.log_json);

  tracing::info!("Starting stock service...");

  let store = match build_store(&app_config).await {
    Ok(store) => store,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise the product store.");
      return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }
  };

  let app_state = AppState::new(store, app_config.clone());

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(web::json_config())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
