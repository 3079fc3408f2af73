//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求，包含请求 ID、路径、状态码和延迟

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
///
/// 记录请求开始和结束，包含以下信息：
/// - 请求 ID (x-request-id)
/// - HTTP 方法和路由模板
/// - 响应状态码
/// - 请求延迟 (毫秒)
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    // 从请求头获取 Request ID，如果不存在则生成一个
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Request started"
    );

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    // 根据状态码使用不同级别记录日志
    if response.status().is_server_error() {
        warn!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed with server error");
    } else if response.status().is_client_error() {
        warn!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed with client error");
    } else {
        info!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed successfully");
    }

    response
}
