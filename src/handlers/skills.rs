use axum::extract::State;
use axum::response::{IntoResponse, Response};
use sqlx::SqlitePool;

use crate::db;
use crate::models::skill::Skill;
use crate::utils::response::{degraded, success};

pub async fn list_skills(State(pool): State<SqlitePool>) -> Response {
    match db::skills::list(&pool).await {
        Ok(skills) => success(skills, "Skills retrieved").into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to list skills");
            degraded(Vec::<Skill>::new(), "Error retrieving skills from database").into_response()
        }
    }
}
