use super::models::{PostsQuery, RefreshResponse, TwitterPost};
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use nduthi_gear::schema::twitter_posts;
use std::env;

const DEFAULT_FEED_LIMIT: i64 = 10;

async fn latest_posts(
    pool: &Pool,
    limit: i64,
) -> Result<Vec<TwitterPost>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    twitter_posts::table
        .order(twitter_posts::created_at.desc())
        .limit(limit)
        .select(TwitterPost::as_select())
        .load(&mut conn)
        .await
        .map_err(internal_error)
}

pub async fn get_twitter_posts(
    State(pool): State<Pool>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<Vec<TwitterPost>>, (StatusCode, String)> {
    let limit = query.limit.unwrap_or(DEFAULT_FEED_LIMIT);
    let res = latest_posts(&pool, limit).await?;

    Ok(Json(res))
}

// There is no live integration; with a credential configured this simply
// replays the stored feed with a fresh timestamp.
pub async fn refresh_twitter_feed(
    State(pool): State<Pool>,
) -> Result<Json<RefreshResponse>, (StatusCode, String)> {
    let api_key = env::var("TWITTER_API_KEY").or_else(|_| env::var("TWITTER_BEARER_TOKEN"));

    if api_key.is_err() {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Twitter API key not configured".to_owned(),
        ));
    }

    let posts = latest_posts(&pool, DEFAULT_FEED_LIMIT).await?;

    Ok(Json(RefreshResponse {
        posts,
        last_updated: chrono::Utc::now().to_rfc3339(),
    }))
}
