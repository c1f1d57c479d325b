use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use crate::utils::error::AppError;

pub mod dashboard;
pub mod events;
pub mod organisations;
pub mod reports;
pub mod skills;
pub mod volunteers;

pub async fn not_found(uri: Uri) -> Response {
    AppError::NotFound(format!("No route for '{}'", uri.path())).into_response()
}
