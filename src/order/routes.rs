use axum::{
    Router,
    routing::{get, patch},
};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/orders",
            get(handlers::get_orders).post(handlers::create_order),
        )
        .route("/orders/{id}", get(handlers::get_order_by_id))
        .route("/orders/{id}/status", patch(handlers::update_order_status))
}
