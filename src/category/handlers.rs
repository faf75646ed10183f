use super::models::{Category, NewCategory, UpdateCategory};
use crate::utils::types::Pool;
use crate::utils::{db_error, internal_error, validation_error};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use nduthi_gear::schema::categories;
use validator::Validate;

pub async fn get_categories(
    State(pool): State<Pool>,
) -> Result<Json<Vec<Category>>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = categories::table
        .order(categories::name.asc())
        .select(Category::as_select())
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn get_category_by_id(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
) -> Result<Json<Category>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = categories::table
        .find(id)
        .select(Category::as_select())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    Ok(Json(res))
}

pub async fn create_category(
    State(pool): State<Pool>,
    Json(payload): Json<NewCategory>,
) -> Result<Json<Category>, (StatusCode, String)> {
    payload.validate().map_err(validation_error)?;

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::insert_into(categories::table)
        .values(&payload)
        .returning(Category::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn update_category(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
    Json(payload): Json<UpdateCategory>,
) -> Result<Json<Category>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::update(categories::table.find(id))
        .set(&payload)
        .returning(Category::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    Ok(Json(res))
}

pub async fn delete_category(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
) -> Result<Json<Category>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::delete(categories::table.find(id))
        .returning(Category::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    Ok(Json(res))
}
