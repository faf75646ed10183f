use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use nduthi_gear::schema::{order_items, orders};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub total_amount: BigDecimal,
    pub status: String,
    pub payment_status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Validate, Debug, PartialEq, Clone)]
#[diesel(table_name = orders)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: Option<i32>,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub customer_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub customer_email: String,
    #[validate(length(min = 10, message = "Phone must be at least 10 characters"))]
    pub customer_phone: String,
    #[validate(length(min = 10, message = "Address must be at least 10 characters"))]
    pub shipping_address: String,
    pub total_amount: BigDecimal,
    pub status: String,
    pub payment_status: String,
}

#[derive(
    Queryable, Selectable, Debug, PartialEq, Identifiable, Associations, Serialize,
)]
#[diesel(belongs_to(Order))]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub subtotal: BigDecimal,
}

/// One checkout line as submitted by the storefront. The order id is not
/// known until the order row exists, so the payload carries none.
#[derive(Serialize, Deserialize, Validate, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    pub product_id: i32,
    pub product_name: String,
    pub product_price: BigDecimal,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub subtotal: BigDecimal,
}

#[derive(Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub subtotal: BigDecimal,
}

impl NewOrderItem {
    pub fn from_payload(order_id: i32, item: &OrderItemPayload) -> Self {
        NewOrderItem {
            order_id,
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            product_price: item.product_price.clone(),
            quantity: item.quantity,
            size: item.size.clone(),
            color: item.color.clone(),
            subtotal: item.subtotal.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct CreateOrderRequest {
    pub order: NewOrder,
    pub items: Vec<OrderItemPayload>,
}

#[derive(Serialize)]
pub struct CreatedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_request_parses_storefront_body() {
        let body = serde_json::json!({
            "order": {
                "customerName": "Asha Njeri",
                "customerEmail": "asha@example.com",
                "customerPhone": "0712345678",
                "shippingAddress": "14 Kimathi Street, Nairobi",
                "totalAmount": "5000.00",
                "status": "pending",
                "paymentStatus": "pending"
            },
            "items": [{
                "productId": 3,
                "productName": "Bell Custom 500",
                "productPrice": "2500.00",
                "quantity": 2,
                "size": "M",
                "color": null,
                "subtotal": "5000.00"
            }]
        });

        let request: CreateOrderRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.order.user_id, None);
        assert_eq!(request.order.total_amount.to_string(), "5000.00");
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].size.as_deref(), Some("M"));
        assert_eq!(request.items[0].color, None);
    }

    #[test]
    fn order_payloads_serialize_camel_case() {
        let item = OrderItemPayload {
            product_id: 1,
            product_name: "Arai XD-4".to_owned(),
            product_price: "95000.00".parse().unwrap(),
            quantity: 1,
            size: None,
            color: Some("Black".to_owned()),
            subtotal: "95000.00".parse().unwrap(),
        };

        let value = serde_json::to_value(&item).unwrap();

        assert!(value.get("productId").is_some());
        assert!(value.get("productPrice").is_some());
        assert!(value.get("product_id").is_none());
    }
}
