//! Client API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub(crate) const PATH: &str = "/clients";

pub fn router() -> Router<ServerState> {
    Router::new().nest(PATH, routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/orders", get(handler::list_orders))
}
