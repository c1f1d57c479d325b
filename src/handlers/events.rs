use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use sqlx::SqlitePool;

use crate::db;
use crate::models::event::EventWithOrganisation;
use crate::utils::error::AppError;
use crate::utils::response::{degraded, redirect_with_error, redirect_with_message, success};

pub async fn list_events(State(pool): State<SqlitePool>) -> Response {
    match db::events::list(&pool).await {
        Ok(events) => success(events, "Events retrieved").into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to list events");
            degraded(
                Vec::<EventWithOrganisation>::new(),
                "Error retrieving events from database",
            )
            .into_response()
        }
    }
}

pub async fn get_event(
    State(pool): State<SqlitePool>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let event = db::events::get(&pool, event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{event_id}' was not found")))?;

    Ok(success(event, "Event retrieved").into_response())
}

/// Confirmed, irreversible delete. Always redirects back to the event
/// list; the caller confirms before sending the request.
pub async fn delete_event(
    State(pool): State<SqlitePool>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(event) = db::events::get(&pool, event_id).await? else {
        return Ok(redirect_with_error("/events", "NOT_FOUND", "Event not found"));
    };

    let rows_affected = db::events::delete(&pool, event_id).await?;

    if rows_affected > 0 {
        tracing::info!(event_id, "Event deleted");
        Ok(redirect_with_message(
            "/events",
            format!("Event \"{}\" deleted successfully", event.event_name),
        ))
    } else {
        // A concurrent delete got there first; the event is gone either
        // way, so this is not an error.
        Ok(redirect_with_message(
            "/events",
            format!("Event \"{}\" was already deleted", event.event_name),
        ))
    }
}
