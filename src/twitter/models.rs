use chrono::NaiveDateTime;
use diesel::prelude::*;
use nduthi_gear::schema::twitter_posts;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = twitter_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct TwitterPost {
    pub id: i32,
    pub tweet_id: String,
    pub content: String,
    pub author: String,
    pub handle: String,
    pub created_at: NaiveDateTime,
    pub likes: i32,
    pub retweets: i32,
    pub replies: i32,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct PostsQuery {
    pub limit: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub posts: Vec<TwitterPost>,
    pub last_updated: String,
}
