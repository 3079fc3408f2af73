//! Client API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::AppResult;
use shared::models::{Client, ClientPayload, Order};
use uuid::Uuid;

use super::PATH;
use crate::api::extract::{AppJson, AppPath};
use crate::api::links::Linked;
use crate::api::orders;
use crate::core::ServerState;

/// GET /clients - 获取所有客户
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Linked<Client>>>> {
    let clients = state.clients.list().await?;
    let linked = clients
        .into_iter()
        .map(|c| {
            let link = state.links.item(PATH, c.client_id);
            Linked::new(c, link)
        })
        .collect();
    Ok(Json(linked))
}

/// GET /clients/{id} - 获取单个客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Linked<Client>>> {
    let client = state.clients.get(id).await?;
    let link = state.links.collection("Clients List", PATH);
    Ok(Json(Linked::new(client, link)))
}

/// POST /clients - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ClientPayload>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = state.clients.create(payload).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /clients/{id} - 更新客户
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<ClientPayload>,
) -> AppResult<Json<Client>> {
    let client = state.clients.update(id, payload).await?;
    Ok(Json(client))
}

/// DELETE /clients/{id} - 删除客户 (有订单时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    state.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /clients/{id}/orders - 获取客户的所有订单
pub async fn list_orders(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Vec<Linked<Order>>>> {
    let found = state.orders.list_by_client(id).await?;
    Ok(Json(orders::with_self_links(&state, found)))
}
