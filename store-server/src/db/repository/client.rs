//! Client Repository

use super::{RepoError, RepoResult};
use shared::models::{Client, ClientPayload};
use sqlx::SqlitePool;
use uuid::Uuid;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Client>> {
    let clients = sqlx::query_as::<_, Client>(
        "SELECT client_id, name, login, email FROM clients ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;
    Ok(clients)
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> RepoResult<Option<Client>> {
    let client = sqlx::query_as::<_, Client>(
        "SELECT client_id, name, login, email FROM clients WHERE client_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(client)
}

pub async fn exists(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    let found: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM clients WHERE client_id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(found)
}

/// Number of orders referencing the client
pub async fn count_orders(pool: &SqlitePool, id: Uuid) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE client_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: &ClientPayload) -> RepoResult<Client> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO clients (client_id, name, login, email) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(&data.name)
        .bind(&data.login)
        .bind(&data.email)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create client".into()))
}

/// Overwrite every field of an existing client
pub async fn update(pool: &SqlitePool, id: Uuid, data: &ClientPayload) -> RepoResult<Client> {
    let rows = sqlx::query("UPDATE clients SET name = ?, login = ?, email = ? WHERE client_id = ?")
        .bind(&data.name)
        .bind(&data.login)
        .bind(&data.email)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Client {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Client {id} not found")))
}

/// Delete a client that no order references
///
/// Returns `false` when no row matched.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> RepoResult<bool> {
    // Check for referencing orders
    if count_orders(pool, id).await? > 0 {
        return Err(RepoError::Constraint(format!(
            "Client {id} is referenced by orders"
        )));
    }
    let rows = sqlx::query("DELETE FROM clients WHERE client_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
