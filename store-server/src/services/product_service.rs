//! Product Service

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductPayload};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::db::repository::{RepoError, product};

#[derive(Clone, Debug)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: ProductPayload) -> AppResult<Product> {
        payload.validate()?;
        let created = product::create(&self.pool, &payload).await?;
        tracing::info!(product_id = %created.product_id, value = %created.value, "Product created");
        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        product::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(product::find_all(&self.pool).await?)
    }

    pub async fn update(&self, id: Uuid, payload: ProductPayload) -> AppResult<Product> {
        payload.validate()?;
        let updated = product::update(&self.pool, id, &payload)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => not_found(id),
                other => other.into(),
            })?;
        tracing::info!(product_id = %id, "Product updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.get(id).await?;
        let removed = product::delete(&self.pool, id).await.map_err(|e| match e {
            RepoError::Constraint(_) => AppError::with_message(
                ErrorCode::ProductHasOrders,
                "Cannot delete product because there are orders associated with it.",
            ),
            other => other.into(),
        })?;
        if !removed {
            return Err(not_found(id));
        }
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product not found: {id}"))
}
