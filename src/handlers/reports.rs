use axum::extract::State;
use axum::response::{IntoResponse, Response};
use sqlx::SqlitePool;

use crate::db;
use crate::utils::error::AppError;
use crate::utils::response::success;

pub async fn event_statistics(State(pool): State<SqlitePool>) -> Result<Response, AppError> {
    let statistics = db::reports::event_statistics(&pool).await?;
    Ok(success(statistics, "Event statistics").into_response())
}

pub async fn volunteer_profiles(State(pool): State<SqlitePool>) -> Result<Response, AppError> {
    let profiles = db::reports::volunteer_profiles(&pool).await?;
    Ok(success(profiles, "Volunteer profiles").into_response())
}

pub async fn skill_distribution(State(pool): State<SqlitePool>) -> Result<Response, AppError> {
    let distribution = db::reports::skill_distribution(&pool).await?;
    Ok(success(distribution, "Skill distribution").into_response())
}

pub async fn organisation_summary(State(pool): State<SqlitePool>) -> Result<Response, AppError> {
    let summary = db::reports::organisation_event_summary(&pool).await?;
    Ok(success(summary, "Organisation event summary").into_response())
}
