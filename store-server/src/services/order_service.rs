//! Order Service
//!
//! Resolves the client and product references of an order through the other
//! two services, so an unknown id surfaces with that entity's not-found error.

use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderPayload};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{ClientService, ProductService};
use crate::db::repository::{RepoError, order};

#[derive(Clone, Debug)]
pub struct OrderService {
    pool: SqlitePool,
    clients: ClientService,
    products: ProductService,
}

impl OrderService {
    pub fn new(pool: SqlitePool, clients: ClientService, products: ProductService) -> Self {
        Self {
            pool,
            clients,
            products,
        }
    }

    /// Place a new order stamped with the current time
    pub async fn create(&self, payload: OrderPayload) -> AppResult<Order> {
        let product_ids = self.resolve(&payload).await?;
        let written = order::create(&self.pool, payload.client_id, &product_ids, Utc::now()).await;
        let created = match written {
            Ok(order) => order,
            Err(e) => return Err(self.write_error(&payload, e).await),
        };
        tracing::info!(
            order_id = %created.order_id,
            client_id = %payload.client_id,
            products = product_ids.len(),
            "Order created"
        );
        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Order> {
        order::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(&self) -> AppResult<Vec<Order>> {
        Ok(order::find_all(&self.pool).await?)
    }

    /// Orders placed by an existing client
    pub async fn list_by_client(&self, client_id: Uuid) -> AppResult<Vec<Order>> {
        self.clients.get(client_id).await?;
        Ok(order::find_by_client(&self.pool, client_id).await?)
    }

    /// Orders that include an existing product
    pub async fn list_by_product(&self, product_id: Uuid) -> AppResult<Vec<Order>> {
        self.products.get(product_id).await?;
        Ok(order::find_by_product(&self.pool, product_id).await?)
    }

    /// Replace client and products, restamping the order
    ///
    /// The new timestamp never precedes the previous one, even if the wall
    /// clock stepped backwards.
    pub async fn update(&self, id: Uuid, payload: OrderPayload) -> AppResult<Order> {
        let existing = self.get(id).await?;
        let product_ids = self.resolve(&payload).await?;
        let ordered_at = Utc::now().max(existing.ordered_at);

        let updated =
            match order::update(&self.pool, id, payload.client_id, &product_ids, ordered_at).await {
                Ok(order) => order,
                Err(RepoError::NotFound(_)) => return Err(not_found(id)),
                Err(e) => return Err(self.write_error(&payload, e).await),
            };
        tracing::info!(order_id = %id, client_id = %payload.client_id, "Order updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.get(id).await?;
        if !order::delete(&self.pool, id).await? {
            return Err(not_found(id));
        }
        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }

    /// Check the client and every product exist; returns the distinct product ids
    async fn resolve(&self, payload: &OrderPayload) -> AppResult<Vec<Uuid>> {
        self.clients.get(payload.client_id).await?;
        let product_ids = payload.distinct_product_ids();
        for product_id in &product_ids {
            self.products.get(*product_id).await?;
        }
        Ok(product_ids)
    }

    /// Map a failed order write to the caller-facing error
    ///
    /// A foreign-key failure means a client or product was deleted after
    /// [`Self::resolve`] saw it; resolving again names the missing one.
    async fn write_error(&self, payload: &OrderPayload, err: RepoError) -> AppError {
        match err {
            RepoError::Constraint(msg) => match self.resolve(payload).await {
                Err(missing) => missing,
                Ok(_) => RepoError::Constraint(msg).into(),
            },
            other => other.into(),
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("Order not found: {id}"))
}
