use sqlx::SqlitePool;

use crate::models::skill::Skill;

#[tracing::instrument(name = "List skills", skip(pool))]
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Skill>> {
    sqlx::query_as(
        "SELECT skill_id, skill_name, skill_description, skill_category
         FROM SKILL
         ORDER BY skill_category, skill_name",
    )
    .fetch_all(pool)
    .await
}
