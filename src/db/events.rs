use sqlx::SqlitePool;

use crate::models::event::EventWithOrganisation;

#[tracing::instrument(name = "List events", skip(pool))]
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<EventWithOrganisation>> {
    sqlx::query_as(
        "SELECT e.event_id, e.event_name, e.description, e.start_date, e.end_date,
                e.location, e.max_volunteers, o.org_id, o.org_name
         FROM EVENT e
         JOIN ORGANISATION o ON e.org_id = o.org_id
         ORDER BY e.start_date",
    )
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Fetch event by id", skip(pool))]
pub async fn get(pool: &SqlitePool, event_id: i64) -> sqlx::Result<Option<EventWithOrganisation>> {
    sqlx::query_as(
        "SELECT e.event_id, e.event_name, e.description, e.start_date, e.end_date,
                e.location, e.max_volunteers, o.org_id, o.org_name
         FROM EVENT e
         JOIN ORGANISATION o ON e.org_id = o.org_id
         WHERE e.event_id = ?",
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await
}

/// Returns the number of rows deleted: 0 when no such event, 1 on success.
/// Association rows (registrations, required skills) go with the event via
/// `ON DELETE CASCADE`.
#[tracing::instrument(name = "Delete event", skip(pool))]
pub async fn delete(pool: &SqlitePool, event_id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM EVENT WHERE event_id = ?")
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

#[tracing::instrument(name = "Count events", skip(pool))]
pub async fn count(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM EVENT")
        .fetch_one(pool)
        .await
}
