use axum::{
    Router,
    routing::{get, post},
};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route("/twitter/posts", get(handlers::get_twitter_posts))
        .route("/twitter/refresh", post(handlers::refresh_twitter_feed))
}
