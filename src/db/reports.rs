//! Reporting queries: multi-table joins, grouping and computed columns.

use sqlx::SqlitePool;

use crate::models::report::{
    EventStatistics, EventVolunteer, OrganisationEventSummary, SkillDistribution, VolunteerProfile,
};
use crate::models::skill::SkilledVolunteer;

/// Volunteers holding a skill whose name contains `skill_name`
/// (case-insensitive), strongest first. DISTINCT collapses the result to
/// one row per volunteer-skill pairing.
#[tracing::instrument(name = "Search volunteers by skill", skip(pool))]
pub async fn search_volunteers_by_skill(
    pool: &SqlitePool,
    skill_name: &str,
) -> sqlx::Result<Vec<SkilledVolunteer>> {
    sqlx::query_as(
        "SELECT DISTINCT v.volunteer_id, v.first_name, v.last_name, v.email, v.phone,
                vs.proficiency_level, vs.years_experience
         FROM VOLUNTEER v
         JOIN VOLUNTEER_SKILL vs ON v.volunteer_id = vs.volunteer_id
         JOIN SKILL s ON vs.skill_id = s.skill_id
         WHERE s.skill_name LIKE ?
         ORDER BY vs.proficiency_level DESC, vs.years_experience DESC",
    )
    .bind(format!("%{skill_name}%"))
    .fetch_all(pool)
    .await
}

/// Every registration for the given organisation's events, via the
/// four-way join VOLUNTEER ↔ VOLUNTEER_EVENT ↔ EVENT ↔ ORGANISATION.
#[tracing::instrument(name = "Volunteers for organisation events", skip(pool))]
pub async fn volunteers_for_organisation_events(
    pool: &SqlitePool,
    org_id: i64,
) -> sqlx::Result<Vec<EventVolunteer>> {
    sqlx::query_as(
        "SELECT v.volunteer_id, v.first_name, v.last_name, v.email, v.phone,
                e.event_name, e.start_date, e.location,
                ve.registration_date, ve.attendance_status,
                o.org_name
         FROM VOLUNTEER v
         INNER JOIN VOLUNTEER_EVENT ve ON v.volunteer_id = ve.volunteer_id
         INNER JOIN EVENT e ON ve.event_id = e.event_id
         INNER JOIN ORGANISATION o ON e.org_id = o.org_id
         WHERE o.org_id = ?
         ORDER BY e.start_date, v.last_name, v.first_name",
    )
    .bind(org_id)
    .fetch_all(pool)
    .await
}

/// Registration statistics per event: registrant count against capacity,
/// duration in whole days, and the Full/Partial/Empty label.
#[tracing::instrument(name = "Event statistics", skip(pool))]
pub async fn event_statistics(pool: &SqlitePool) -> sqlx::Result<Vec<EventStatistics>> {
    sqlx::query_as(
        "SELECT e.event_name, o.org_name,
                COUNT(ve.volunteer_id) AS volunteer_count,
                e.max_volunteers,
                e.start_date, e.end_date,
                CAST((julianday(e.end_date) - julianday(e.start_date)) AS INTEGER) AS duration_days,
                CASE
                    WHEN COUNT(ve.volunteer_id) >= e.max_volunteers THEN 'Full'
                    WHEN COUNT(ve.volunteer_id) > 0 THEN 'Partial'
                    ELSE 'Empty'
                END AS status
         FROM EVENT e
         JOIN ORGANISATION o ON e.org_id = o.org_id
         LEFT JOIN VOLUNTEER_EVENT ve ON e.event_id = ve.event_id
         GROUP BY e.event_id, e.event_name, o.org_name, e.max_volunteers, e.start_date, e.end_date
         ORDER BY volunteer_count DESC",
    )
    .fetch_all(pool)
    .await
}

/// Volunteers with the derived columns full_name and age (whole years,
/// 365.25-day years).
#[tracing::instrument(name = "Volunteer profiles", skip(pool))]
pub async fn volunteer_profiles(pool: &SqlitePool) -> sqlx::Result<Vec<VolunteerProfile>> {
    sqlx::query_as(
        "SELECT volunteer_id,
                (first_name || ' ' || last_name) AS full_name,
                email, phone, address,
                date_of_birth,
                CAST((julianday('now') - julianday(date_of_birth)) / 365.25 AS INTEGER) AS age,
                registration_date
         FROM VOLUNTEER
         ORDER BY full_name",
    )
    .fetch_all(pool)
    .await
}

/// Experience spread per skill. The HAVING clause drops skills no
/// volunteer holds, which also keeps the min/avg/max aggregates non-NULL.
#[tracing::instrument(name = "Skill distribution", skip(pool))]
pub async fn skill_distribution(pool: &SqlitePool) -> sqlx::Result<Vec<SkillDistribution>> {
    sqlx::query_as(
        "SELECT s.skill_name, s.skill_category,
                COUNT(vs.volunteer_id) AS volunteer_count,
                AVG(vs.years_experience) AS avg_experience,
                MAX(vs.years_experience) AS max_experience,
                MIN(vs.years_experience) AS min_experience
         FROM SKILL s
         LEFT JOIN VOLUNTEER_SKILL vs ON s.skill_id = vs.skill_id
         GROUP BY s.skill_id, s.skill_name, s.skill_category
         HAVING COUNT(vs.volunteer_id) > 0
         ORDER BY volunteer_count DESC, s.skill_category",
    )
    .fetch_all(pool)
    .await
}

/// Event and volunteer engagement per organisation. Organisations with no
/// events still appear, with zero counts and a NULL average capacity.
#[tracing::instrument(name = "Organisation event summary", skip(pool))]
pub async fn organisation_event_summary(
    pool: &SqlitePool,
) -> sqlx::Result<Vec<OrganisationEventSummary>> {
    sqlx::query_as(
        "SELECT o.org_name, o.org_type,
                COUNT(DISTINCT e.event_id) AS total_events,
                COUNT(DISTINCT ve.volunteer_id) AS unique_volunteers,
                COUNT(ve.volunteer_id) AS total_registrations,
                AVG(e.max_volunteers) AS avg_event_capacity
         FROM ORGANISATION o
         LEFT JOIN EVENT e ON o.org_id = e.org_id
         LEFT JOIN VOLUNTEER_EVENT ve ON e.event_id = ve.event_id
         GROUP BY o.org_id, o.org_name, o.org_type
         ORDER BY total_events DESC, unique_volunteers DESC",
    )
    .fetch_all(pool)
    .await
}
