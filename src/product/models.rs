use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use nduthi_gear::schema::products;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(
    Queryable, Selectable, Debug, PartialEq, Clone, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub product_type: String,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
    pub brand: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub image_url: String,
    pub stock_quantity: i32,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = products)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub product_type: String,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    #[validate(length(min = 1, message = "Product image is required"))]
    pub image_url: String,
    #[validate(range(min = 0, message = "Valid stock quantity is required"))]
    pub stock_quantity: Option<i32>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = products)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub product_type: Option<String>,
    pub price: Option<BigDecimal>,
    pub category_id: Option<i32>,
    pub brand: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub stock_quantity: Option<i32>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub category_id: Option<i32>,
    pub featured: Option<bool>,
}
