#![allow(dead_code)]

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use community_connect_server::models::volunteer::NewVolunteer;

/// Fresh in-memory database with migrations (schema + reference seed)
/// applied. Single connection so the in-memory database survives for the
/// pool's lifetime.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid test database URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}

pub fn sample_volunteer(first_name: &str, last_name: &str) -> NewVolunteer {
    NewVolunteer {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: "0412345678".to_string(),
        address: "1 Example St".to_string(),
    }
}

pub async fn insert_event(
    pool: &SqlitePool,
    event_name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    max_volunteers: i64,
    org_id: i64,
) -> i64 {
    sqlx::query(
        "INSERT INTO EVENT (event_name, description, start_date, end_date, location, max_volunteers, org_id)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(event_name)
    .bind("fixture event")
    .bind(start_date)
    .bind(end_date)
    .bind("Community Hall")
    .bind(max_volunteers)
    .bind(org_id)
    .execute(pool)
    .await
    .expect("insert event fixture")
    .last_insert_rowid()
}

pub async fn register_for_event(pool: &SqlitePool, volunteer_id: i64, event_id: i64) {
    sqlx::query("INSERT INTO VOLUNTEER_EVENT (volunteer_id, event_id) VALUES (?, ?)")
        .bind(volunteer_id)
        .bind(event_id)
        .execute(pool)
        .await
        .expect("insert registration fixture");
}

pub async fn add_skill(
    pool: &SqlitePool,
    volunteer_id: i64,
    skill_id: i64,
    proficiency_level: i64,
    years_experience: i64,
) {
    sqlx::query(
        "INSERT INTO VOLUNTEER_SKILL (volunteer_id, skill_id, proficiency_level, years_experience)
         VALUES (?, ?, ?, ?)",
    )
    .bind(volunteer_id)
    .bind(skill_id)
    .bind(proficiency_level)
    .bind(years_experience)
    .execute(pool)
    .await
    .expect("insert volunteer skill fixture");
}
