use super::models::{NewProduct, Product, ProductFilter, UpdateProduct};
use crate::utils::types::Pool;
use crate::utils::{db_error, internal_error, validation_error};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use nduthi_gear::schema::products;
use validator::Validate;

const FEATURED_LIMIT: i64 = 6;

fn valid_product_type(product_type: &str) -> bool {
    matches!(product_type, "helmet" | "jacket" | "gloves" | "boots")
}

pub async fn get_products(
    State(pool): State<Pool>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    // Filter precedence mirrors the storefront: featured, then type, then category.
    let res = if filter.featured == Some(true) {
        products::table
            .filter(products::featured.eq(true))
            .limit(FEATURED_LIMIT)
            .select(Product::as_select())
            .load(&mut conn)
            .await
    } else if let Some(product_type) = filter.product_type {
        products::table
            .filter(products::product_type.eq(product_type))
            .select(Product::as_select())
            .load(&mut conn)
            .await
    } else if let Some(category_id) = filter.category_id {
        products::table
            .filter(products::category_id.eq(category_id))
            .select(Product::as_select())
            .load(&mut conn)
            .await
    } else {
        products::table
            .order(products::created_at.desc())
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }
    .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn get_product_by_id(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
) -> Result<Json<Product>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = products::table
        .find(id)
        .select(Product::as_select())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    Ok(Json(res))
}

pub async fn create_product(
    State(pool): State<Pool>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<Product>, (StatusCode, String)> {
    payload.validate().map_err(validation_error)?;

    if !valid_product_type(&payload.product_type) {
        return Err((StatusCode::BAD_REQUEST, "Wrong product type".to_owned()));
    }

    if payload.price <= BigDecimal::from(0) {
        return Err((StatusCode::BAD_REQUEST, "Valid price is required".to_owned()));
    }

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::insert_into(products::table)
        .values(&payload)
        .returning(Product::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn update_product(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
    Json(payload): Json<UpdateProduct>,
) -> Result<Json<Product>, (StatusCode, String)> {
    if let Some(product_type) = &payload.product_type {
        if !valid_product_type(product_type) {
            return Err((StatusCode::BAD_REQUEST, "Wrong product type".to_owned()));
        }
    }

    if let Some(price) = &payload.price {
        if price <= &BigDecimal::from(0) {
            return Err((StatusCode::BAD_REQUEST, "Valid price is required".to_owned()));
        }
    }

    let mut conn = pool.get().await.map_err(internal_error)?;

    let updated_at = chrono::Local::now().naive_local();

    let res = diesel::update(products::table.find(id))
        .set((&payload, products::updated_at.eq(updated_at)))
        .returning(Product::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    Ok(Json(res))
}

pub async fn delete_product(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
) -> Result<Json<Product>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::delete(products::table.find(id))
        .returning(Product::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    Ok(Json(res))
}
