// service/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// When unset, products are kept in process memory and lost on restart.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub log_json: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    fn parse_or<T: FromStr>(lookup: &dyn Fn(&str) -> Option<String>, var_name: &str, default: T) -> Result<T>
    where
      T::Err: std::fmt::Display,
    {
      match lookup(var_name) {
        Some(raw) => raw
          .trim()
          .parse::<T>()
          .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e))),
        None => Ok(default),
      }
    }

    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parse_or::<u16>(&lookup, "SERVER_PORT", 8080)?;
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
    let db_max_connections = parse_or::<u32>(&lookup, "DB_MAX_CONNECTIONS", 5)?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    let log_json = parse_or::<bool>(&lookup, "LOG_JSON", false)?;

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      log_json,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.server_address(), "127.0.0.1:8080");
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.db_max_connections, 5);
    assert!(!cfg.log_json);
  }

  #[test]
  fn explicit_values_are_parsed() {
    let cfg = config_from(&[
      ("SERVER_HOST", "0.0.0.0"),
      ("SERVER_PORT", "9000"),
      ("DATABASE_URL", "postgres://stock@localhost/stock"),
      ("DB_MAX_CONNECTIONS", "12"),
      ("LOG_JSON", "true"),
    ])
    .unwrap();
    assert_eq!(cfg.server_address(), "0.0.0.0:9000");
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://stock@localhost/stock"));
    assert_eq!(cfg.db_max_connections, 12);
    assert!(cfg.log_json);
  }

  #[test]
  fn invalid_values_are_config_errors() {
    for vars in [
      [("SERVER_PORT", "eighty")],
      [("LOG_JSON", "yes")],
      [("DB_MAX_CONNECTIONS", "0")],
    ] {
      match config_from(&vars) {
        Err(AppError::Config(message)) => assert!(message.contains(vars[0].0)),
        other => panic!("Expected AppError::Config for {:?}, got {:?}", vars, other),
      }
    }
  }

  #[test]
  fn blank_database_url_means_in_memory() {
    let cfg = config_from(&[("DATABASE_URL", "  ")]).unwrap();
    assert_eq!(cfg.database_url, None);
  }
}
