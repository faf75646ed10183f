use super::models::{GearFilter, GearProduct};
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use nduthi_gear::schema::gear_products;

pub async fn get_gear_products(
    State(pool): State<Pool>,
    Query(filter): Query<GearFilter>,
) -> Result<Json<Vec<GearProduct>>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = if let Some(category) = filter.category {
        gear_products::table
            .filter(gear_products::category.eq(category))
            .select(GearProduct::as_select())
            .load(&mut conn)
            .await
    } else {
        gear_products::table
            .select(GearProduct::as_select())
            .load(&mut conn)
            .await
    }
    .map_err(internal_error)?;

    Ok(Json(res))
}
