use sqlx::SqlitePool;

const EXPECTED_TABLES: [&str; 7] = [
    "VOLUNTEER",
    "ORGANISATION",
    "SKILL",
    "EVENT",
    "VOLUNTEER_EVENT",
    "VOLUNTEER_SKILL",
    "EVENT_SKILL",
];

/// True when the database is reachable and every expected table exists.
#[tracing::instrument(name = "Check schema", skip(pool))]
pub async fn check_schema(pool: &SqlitePool) -> sqlx::Result<bool> {
    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;

    Ok(EXPECTED_TABLES
        .iter()
        .all(|expected| tables.iter().any(|t| t == expected)))
}
