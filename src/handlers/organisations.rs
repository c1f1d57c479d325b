use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use sqlx::SqlitePool;

use crate::db;
use crate::models::organisation::Organisation;
use crate::utils::error::AppError;
use crate::utils::response::{degraded, success};

pub async fn list_organisations(State(pool): State<SqlitePool>) -> Response {
    match db::organisations::list(&pool).await {
        Ok(organisations) => success(organisations, "Organisations retrieved").into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to list organisations");
            degraded(
                Vec::<Organisation>::new(),
                "Error retrieving organisations from database",
            )
            .into_response()
        }
    }
}

pub async fn get_organisation(
    State(pool): State<SqlitePool>,
    Path(org_id): Path<i64>,
) -> Result<Response, AppError> {
    let organisation = db::organisations::get(&pool, org_id).await?.ok_or_else(|| {
        AppError::NotFound(format!("Organisation with id '{org_id}' was not found"))
    })?;

    Ok(success(organisation, "Organisation retrieved").into_response())
}

/// Every volunteer registered for one of the organisation's events, in
/// event date order.
pub async fn volunteers_for_events(
    State(pool): State<SqlitePool>,
    Path(org_id): Path<i64>,
) -> Result<Response, AppError> {
    let organisation = db::organisations::get(&pool, org_id).await?.ok_or_else(|| {
        AppError::NotFound(format!("Organisation with id '{org_id}' was not found"))
    })?;

    let registrations = db::reports::volunteers_for_organisation_events(&pool, org_id).await?;

    Ok(success(
        registrations,
        format!("Volunteers for {} events", organisation.org_name),
    )
    .into_response())
}
