//! Client Service

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Client, ClientPayload};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::db::repository::{RepoError, client};

#[derive(Clone, Debug)]
pub struct ClientService {
    pool: SqlitePool,
}

impl ClientService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: ClientPayload) -> AppResult<Client> {
        payload.validate()?;
        let created = client::create(&self.pool, &payload).await?;
        tracing::info!(client_id = %created.client_id, "Client created");
        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Client> {
        client::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// All clients in insertion order
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        Ok(client::find_all(&self.pool).await?)
    }

    /// Overwrite name, login and email
    pub async fn update(&self, id: Uuid, payload: ClientPayload) -> AppResult<Client> {
        payload.validate()?;
        let updated = client::update(&self.pool, id, &payload)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => not_found(id),
                other => other.into(),
            })?;
        tracing::info!(client_id = %id, "Client updated");
        Ok(updated)
    }

    /// Remove a client no order refers to
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.get(id).await?;
        let removed = client::delete(&self.pool, id).await.map_err(|e| match e {
            RepoError::Constraint(_) => AppError::with_message(
                ErrorCode::ClientHasOrders,
                "Cannot delete client because there are orders associated with it.",
            ),
            other => other.into(),
        })?;
        if !removed {
            return Err(not_found(id));
        }
        tracing::info!(client_id = %id, "Client deleted");
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::with_message(ErrorCode::ClientNotFound, format!("Client not found: {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn service() -> ClientService {
        ClientService::new(DbService::in_memory().await.unwrap().pool)
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let svc = service().await;
        let created = svc
            .create(ClientPayload::new("Ana", "ana", "ana@example.com"))
            .await
            .unwrap();
        assert!(!created.client_id.is_nil());

        let fetched = svc.get(created.client_id).await.unwrap();
        assert_eq!(fetched.name, "Ana");
        assert_eq!(fetched.login, "ana");
        assert_eq!(fetched.email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_blank_field_is_validation_error() {
        let svc = service().await;
        let err = svc
            .create(ClientPayload::new("Ana", "  ", "ana@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("login"));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_everywhere() {
        let svc = service().await;
        let id = Uuid::new_v4();

        let err = svc.get(id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ClientNotFound);
        assert_eq!(err.message, format!("Client not found: {id}"));

        let err = svc
            .update(id, ClientPayload::new("Ana", "ana", "ana@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ClientNotFound);

        let err = svc.delete(id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ClientNotFound);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let svc = service().await;
        let err = svc
            .update(Uuid::new_v4(), ClientPayload::new("", "ana", "ana@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes() {
        let svc = service().await;
        let mut ids = Vec::new();
        for i in 0..5 {
            let c = svc
                .create(ClientPayload::new(format!("C{i}"), format!("c{i}"), format!("c{i}@x.io")))
                .await
                .unwrap();
            ids.push(c.client_id);
        }
        svc.delete(ids[1]).await.unwrap();
        svc.delete(ids[3]).await.unwrap();
        svc.update(ids[4], ClientPayload::new("Last", "last", "last@x.io"))
            .await
            .unwrap();

        let listed = svc.list().await.unwrap();
        let listed_ids: Vec<Uuid> = listed.iter().map(|c| c.client_id).collect();
        assert_eq!(listed_ids, vec![ids[0], ids[2], ids[4]]);
        assert_eq!(listed[2].name, "Last");
    }
}
