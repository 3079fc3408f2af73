//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::AppResult;
use shared::models::{Order, OrderPayload};
use uuid::Uuid;

use super::{PATH, with_self_links};
use crate::api::extract::{AppJson, AppPath};
use crate::api::links::Linked;
use crate::core::ServerState;

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Linked<Order>>>> {
    let orders = state.orders.list().await?;
    Ok(Json(with_self_links(&state, orders)))
}

/// GET /orders/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Linked<Order>>> {
    let order = state.orders.get(id).await?;
    let link = state.links.collection("Orders List", PATH);
    Ok(Json(Linked::new(order, link)))
}

/// POST /orders - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderPayload>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.orders.create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /orders/{id} - 更新订单 (替换客户和商品)
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<OrderPayload>,
) -> AppResult<Json<Order>> {
    let order = state.orders.update(id, payload).await?;
    Ok(Json(order))
}

/// DELETE /orders/{id} - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    state.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
