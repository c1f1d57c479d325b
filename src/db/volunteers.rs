use sqlx::SqlitePool;

use crate::models::volunteer::{NewVolunteer, Volunteer};

#[tracing::instrument(name = "Insert volunteer", skip(pool, volunteer))]
pub async fn create(pool: &SqlitePool, volunteer: &NewVolunteer) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO VOLUNTEER (first_name, last_name, date_of_birth, email, phone, address)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&volunteer.first_name)
    .bind(&volunteer.last_name)
    .bind(volunteer.date_of_birth)
    .bind(&volunteer.email)
    .bind(&volunteer.phone)
    .bind(&volunteer.address)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[tracing::instrument(name = "List volunteers", skip(pool))]
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Volunteer>> {
    sqlx::query_as(
        "SELECT volunteer_id, first_name, last_name, date_of_birth, email, phone, address, registration_date
         FROM VOLUNTEER
         ORDER BY last_name, first_name",
    )
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Fetch volunteer by id", skip(pool))]
pub async fn get(pool: &SqlitePool, volunteer_id: i64) -> sqlx::Result<Option<Volunteer>> {
    sqlx::query_as(
        "SELECT volunteer_id, first_name, last_name, date_of_birth, email, phone, address, registration_date
         FROM VOLUNTEER
         WHERE volunteer_id = ?",
    )
    .bind(volunteer_id)
    .fetch_optional(pool)
    .await
}

/// Returns the number of rows changed: 0 when no such volunteer, 1 on
/// success.
#[tracing::instrument(name = "Update volunteer phone", skip(pool))]
pub async fn update_phone(
    pool: &SqlitePool,
    volunteer_id: i64,
    new_phone: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query("UPDATE VOLUNTEER SET phone = ? WHERE volunteer_id = ?")
        .bind(new_phone)
        .bind(volunteer_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

#[tracing::instrument(name = "Count volunteers", skip(pool))]
pub async fn count(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM VOLUNTEER")
        .fetch_one(pool)
        .await
}
