//! Product Repository

use super::{RepoError, RepoResult};
use rust_decimal::Decimal;
use shared::models::{Product, ProductPayload};
use sqlx::SqlitePool;
use std::str::FromStr;
use uuid::Uuid;

/// Stored product row; `value` is kept as decimal text
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub product_id: Uuid,
    pub name: String,
    pub value: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepoError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let value = Decimal::from_str(&row.value).map_err(|e| {
            RepoError::Database(format!(
                "Corrupt value '{}' for product {}: {e}",
                row.value, row.product_id
            ))
        })?;
        Ok(Product {
            product_id: row.product_id,
            name: row.name,
            value,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> RepoResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT product_id, name, value FROM products ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;
    into_products(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(
        "SELECT product_id, name, value FROM products WHERE product_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.map(Product::try_from).transpose()
}

pub async fn exists(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    let found: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM products WHERE product_id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(found)
}

/// Number of orders that include the product
pub async fn count_orders(pool: &SqlitePool, id: Uuid) -> RepoResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM order_products WHERE product_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: &ProductPayload) -> RepoResult<Product> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO products (product_id, name, value) VALUES (?, ?, ?)")
        .bind(id)
        .bind(&data.name)
        .bind(data.value.to_string())
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

/// Overwrite every field of an existing product
pub async fn update(pool: &SqlitePool, id: Uuid, data: &ProductPayload) -> RepoResult<Product> {
    let rows = sqlx::query("UPDATE products SET name = ?, value = ? WHERE product_id = ?")
        .bind(&data.name)
        .bind(data.value.to_string())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Delete a product that no order includes
pub async fn delete(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    if count_orders(pool, id).await? > 0 {
        return Err(RepoError::Constraint(format!(
            "Product {id} is referenced by orders"
        )));
    }
    let rows = sqlx::query("DELETE FROM products WHERE product_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
