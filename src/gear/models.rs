use diesel::prelude::*;
use nduthi_gear::schema::gear_products;
use serde::{Deserialize, Serialize};

/// Display-only gear card for the marketing page; written by seeding only.
#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = gear_products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct GearProduct {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_min: i32,
    pub price_max: i32,
    pub image_url: String,
    pub in_stock: bool,
}

#[derive(Deserialize, Debug)]
pub struct GearFilter {
    pub category: Option<String>,
}
