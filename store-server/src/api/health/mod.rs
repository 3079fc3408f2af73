//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 服务状态和数据库连通性 |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// ok | error
    database: &'static str,
}

/// GET /health
///
/// 数据库不可用时返回 503
async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let db_ok = state.db.ping().await;
    let (code, status, database) = if db_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        tracing::warn!("Health check: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "error")
    };
    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}
