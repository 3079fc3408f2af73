//! Order API 模块

mod handler;

use axum::{Router, routing::get};
use shared::models::Order;

use crate::api::links::Linked;
use crate::core::ServerState;

pub(crate) const PATH: &str = "/orders";

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
}

/// Attach a `self` link to every order of a list
pub(crate) fn with_self_links(state: &ServerState, orders: Vec<Order>) -> Vec<Linked<Order>> {
    orders
        .into_iter()
        .map(|o| {
            let link = state.links.item(PATH, o.order_id);
            Linked::new(o, link)
        })
        .collect()
}
