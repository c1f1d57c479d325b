use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Serialize)]
pub struct DashboardSummary {
    pub database_ok: bool,
    pub volunteer_count: i64,
    pub organisation_count: i64,
    pub event_count: i64,
}

/// System overview: storage reachability plus entity counts. When the
/// schema probe fails the counts are reported as zero rather than erroring
/// the whole page.
pub async fn dashboard(State(pool): State<SqlitePool>) -> Result<Response, AppError> {
    let database_ok = db::health::check_schema(&pool).await.unwrap_or(false);

    let summary = if database_ok {
        DashboardSummary {
            database_ok,
            volunteer_count: db::volunteers::count(&pool).await?,
            organisation_count: db::organisations::count(&pool).await?,
            event_count: db::events::count(&pool).await?,
        }
    } else {
        DashboardSummary {
            database_ok: false,
            volunteer_count: 0,
            organisation_count: 0,
            event_count: 0,
        }
    };

    Ok(success(summary, "Community Connect overview").into_response())
}
