use axum::{Router, routing::get};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new().route(
        "/consultations",
        get(handlers::get_consultations).post(handlers::create_consultation),
    )
}
