use axum::{http::StatusCode, response::IntoResponse};

pub fn internal_error<E>(err: E) -> (StatusCode, String)
where
    E: std::error::Error,
{
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

// Missing rows come back from diesel as NotFound; everything else is a 500.
pub fn db_error(err: diesel::result::Error) -> (StatusCode, String) {
    match err {
        diesel::result::Error::NotFound => (StatusCode::NOT_FOUND, "Record not found".to_owned()),
        other => internal_error(other),
    }
}

pub fn validation_error(err: validator::ValidationErrors) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
