use super::models::{Consultation, NewConsultation};
use crate::utils::types::Pool;
use crate::utils::{internal_error, validation_error};
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use nduthi_gear::schema::consultations;
use validator::Validate;

fn valid_service_type(service_type: &str) -> bool {
    matches!(
        service_type,
        "motorcycle-consultation" | "budget-guidance" | "confidence-riding"
            | "equipment-recommendations"
    )
}

pub async fn create_consultation(
    State(pool): State<Pool>,
    Json(payload): Json<NewConsultation>,
) -> Result<Json<Consultation>, (StatusCode, String)> {
    payload.validate().map_err(validation_error)?;

    if !valid_service_type(&payload.service_type) {
        return Err((StatusCode::BAD_REQUEST, "Wrong service type".to_owned()));
    }

    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::insert_into(consultations::table)
        .values(&payload)
        .returning(Consultation::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn get_consultations(
    State(pool): State<Pool>,
) -> Result<Json<Vec<Consultation>>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = consultations::table
        .select(Consultation::as_select())
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}
