use sqlx::SqlitePool;

use crate::models::organisation::Organisation;

#[tracing::instrument(name = "List organisations", skip(pool))]
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Organisation>> {
    sqlx::query_as(
        "SELECT org_id, org_name, contact_email, phone, address, org_type, description
         FROM ORGANISATION
         ORDER BY org_name",
    )
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Fetch organisation by id", skip(pool))]
pub async fn get(pool: &SqlitePool, org_id: i64) -> sqlx::Result<Option<Organisation>> {
    sqlx::query_as(
        "SELECT org_id, org_name, contact_email, phone, address, org_type, description
         FROM ORGANISATION
         WHERE org_id = ?",
    )
    .bind(org_id)
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Count organisations", skip(pool))]
pub async fn count(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM ORGANISATION")
        .fetch_one(pool)
        .await
}
