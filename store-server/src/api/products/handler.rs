//! Product API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::AppResult;
use shared::models::{Order, Product, ProductPayload};
use uuid::Uuid;

use super::PATH;
use crate::api::extract::{AppJson, AppPath};
use crate::api::links::Linked;
use crate::api::orders;
use crate::core::ServerState;

/// GET /products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Linked<Product>>>> {
    let products = state.products.list().await?;
    let linked = products
        .into_iter()
        .map(|p| {
            let link = state.links.item(PATH, p.product_id);
            Linked::new(p, link)
        })
        .collect();
    Ok(Json(linked))
}

/// GET /products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Linked<Product>>> {
    let product = state.products.get(id).await?;
    let link = state.links.collection("Products List", PATH);
    Ok(Json(Linked::new(product, link)))
}

/// POST /products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ProductPayload>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.products.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id} - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<ProductPayload>,
) -> AppResult<Json<Product>> {
    let product = state.products.update(id, payload).await?;
    Ok(Json(product))
}

/// DELETE /products/{id} - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /products/{id}/orders - 获取包含该商品的订单
pub async fn list_orders(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Vec<Linked<Order>>>> {
    let found = state.orders.list_by_product(id).await?;
    Ok(Json(orders::with_self_links(&state, found)))
}
