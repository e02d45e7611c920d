// service/src/store/postgres.rs

//! PostgreSQL-backed `ProductStore`.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use stock_core::{Category, Product, ProductId, ProductStore, StoreResult};
use tracing::{debug, info, instrument};

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
  id BIGSERIAL PRIMARY KEY,
  name TEXT NOT NULL UNIQUE,
  minimum_stock INTEGER NOT NULL,
  quantity INTEGER NOT NULL,
  category TEXT NOT NULL
)
"#;

const PRODUCT_COLUMNS: &str = "id, name, minimum_stock, quantity, category";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  minimum_stock: i32,
  quantity: i32,
  category: String,
}

impl TryFrom<ProductRow> for Product {
  type Error = anyhow::Error;

  fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
    let category = row
      .category
      .parse::<Category>()
      .with_context(|| format!("Stored product {} has an unreadable category", row.id))?;
    Ok(Product {
      id: Some(row.id),
      name: row.name,
      minimum_stock: row.minimum_stock,
      quantity: row.quantity,
      category,
    })
  }
}

#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Opens a pool against `database_url` and makes sure the products table exists.
  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await?;
    info!("Successfully connected to the database.");
    let store = Self::new(pool);
    store.ensure_schema().await?;
    Ok(store)
  }

  pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
    debug!("Products table ensured.");
    Ok(())
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "PgProductStore::save", skip(self, product), fields(product_id = ?product.id))]
  async fn save(&self, product: Product) -> StoreResult<Product> {
    let row: ProductRow = match product.id {
      None => sqlx::query_as(&format!(
        "INSERT INTO products (name, minimum_stock, quantity, category) VALUES ($1, $2, $3, $4) RETURNING {}",
        PRODUCT_COLUMNS
      ))
      .bind(&product.name)
      .bind(product.minimum_stock)
      .bind(product.quantity)
      .bind(product.category.as_str())
      .fetch_one(&self.pool)
      .await
      .with_context(|| format!("Failed to insert product '{}'", product.name))?,
      Some(id) => sqlx::query_as(&format!(
        "UPDATE products SET name = $2, minimum_stock = $3, quantity = $4, category = $5 WHERE id = $1 RETURNING {}",
        PRODUCT_COLUMNS
      ))
      .bind(id)
      .bind(&product.name)
      .bind(product.minimum_stock)
      .bind(product.quantity)
      .bind(product.category.as_str())
      .fetch_one(&self.pool)
      .await
      .with_context(|| format!("Failed to update product {}", id))?,
    };
    row.try_into()
  }

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("Failed to fetch product {}", id))?;
    row.map(Product::try_from).transpose()
  }

  async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products WHERE name = $1", PRODUCT_COLUMNS))
      .bind(name)
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("Failed to fetch product named '{}'", name))?;
    row.map(Product::try_from).transpose()
  }

  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products ORDER BY id ASC", PRODUCT_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .context("Failed to fetch products")?;
    rows.into_iter().map(Product::try_from).collect()
  }

  async fn delete_by_id(&self, id: ProductId) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .with_context(|| format!("Failed to delete product {}", id))?;
    Ok(result.rows_affected() > 0)
  }
}
