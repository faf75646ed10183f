use super::models::{
    CreateOrderRequest, CreatedOrder, NewOrderItem, Order, OrderItem, OrderWithItems, StatusUpdate,
};
use crate::utils::types::Pool;
use crate::utils::{db_error, internal_error, validation_error};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use diesel_async::{AsyncConnection, RunQueryDsl};
use nduthi_gear::schema::{order_items, orders};
use validator::Validate;

fn valid_order_status(status: &str) -> bool {
    matches!(
        status,
        "pending" | "processing" | "shipped" | "delivered" | "cancelled"
    )
}

fn valid_payment_status(status: &str) -> bool {
    matches!(status, "pending" | "paid" | "failed")
}

pub async fn get_orders(
    State(pool): State<Pool>,
) -> Result<Json<Vec<Order>>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = orders::table
        .order(orders::created_at.desc())
        .select(Order::as_select())
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn get_order_by_id(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
) -> Result<Json<OrderWithItems>, (StatusCode, String)> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let order = orders::table
        .find(id)
        .select(Order::as_select())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    let items = OrderItem::belonging_to(&order)
        .select(OrderItem::as_select())
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(OrderWithItems { order, items }))
}

pub async fn create_order(
    State(pool): State<Pool>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<CreatedOrder>, (StatusCode, String)> {
    payload.order.validate().map_err(validation_error)?;

    for item in &payload.items {
        item.validate().map_err(validation_error)?;
    }

    if payload.items.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Order items cannot be empty!".to_owned(),
        ));
    }

    if !valid_order_status(&payload.order.status)
        || !valid_payment_status(&payload.order.payment_status)
    {
        return Err((StatusCode::BAD_REQUEST, "Wrong order status".to_owned()));
    }

    let mut conn = pool.get().await.map_err(internal_error)?;

    // The order row and its items land together or not at all.
    let res = conn
        .transaction::<CreatedOrder, diesel::result::Error, _>(move |mut conn| {
            Box::pin(async move {
                let order = diesel::insert_into(orders::table)
                    .values(&payload.order)
                    .returning(Order::as_returning())
                    .get_result(&mut conn)
                    .await?;

                let rows = payload
                    .items
                    .iter()
                    .map(|item| NewOrderItem::from_payload(order.id, item))
                    .collect::<Vec<_>>();

                let items = diesel::insert_into(order_items::table)
                    .values(&rows)
                    .returning(OrderItem::as_returning())
                    .get_results(&mut conn)
                    .await?;

                Ok(CreatedOrder { order, items })
            })
        })
        .await
        .map_err(internal_error)?;

    tracing::info!(order_id = res.order.id, "order created");

    Ok(Json(res))
}

pub async fn update_order_status(
    Path(id): Path<i32>,
    State(pool): State<Pool>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<Order>, (StatusCode, String)> {
    if !valid_order_status(&payload.status) {
        return Err((StatusCode::BAD_REQUEST, "Wrong order status".to_owned()));
    }

    let mut conn = pool.get().await.map_err(internal_error)?;

    let updated_at = chrono::Local::now().naive_local();

    let res = diesel::update(orders::table.find(id))
        .set((
            orders::status.eq(&payload.status),
            orders::updated_at.eq(updated_at),
        ))
        .returning(Order::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(db_error)?;

    Ok(Json(res))
}
