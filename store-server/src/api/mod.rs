//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`clients`] - 客户管理接口
//! - [`products`] - 商品管理接口
//! - [`orders`] - 订单管理接口
//! - [`extract`] - 统一错误格式的请求提取器
//! - [`links`] - 响应中的超媒体链接

pub mod extract;
pub mod links;

pub mod clients;
pub mod health;
pub mod orders;
pub mod products;

use axum::Router;
use shared::error::{AppError, ErrorCode};

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(clients::router())
        .merge(products::router())
        .merge(orders::router())
        .fallback(fallback)
}

/// Unknown routes answer with the structured error body
async fn fallback() -> AppError {
    AppError::with_message(ErrorCode::NotFound, "No route matches the request")
}
