use chrono::NaiveDateTime;
use diesel::prelude::*;
use nduthi_gear::schema::consultations;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = consultations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub message: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

// Status and created_at come from the table defaults; the public form
// never supplies either.
#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = consultations)]
#[serde(rename_all = "camelCase")]
pub struct NewConsultation {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub service_type: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
