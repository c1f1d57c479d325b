use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-event registration statistics. `status` is "Full" when the
/// registrant count has reached capacity, "Partial" when some but not all
/// places are taken, "Empty" when nobody has registered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventStatistics {
    pub event_name: String,
    pub org_name: String,
    pub volunteer_count: i64,
    pub max_volunteers: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i64,
    pub status: String,
}

/// A volunteer row with the derived columns: concatenated full name and
/// age in whole years.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VolunteerProfile {
    pub volunteer_id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub age: i64,
    pub registration_date: NaiveDateTime,
}

/// Experience spread for one skill across the volunteers that hold it.
/// Skills nobody holds are filtered out of the report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillDistribution {
    pub skill_name: String,
    pub skill_category: String,
    pub volunteer_count: i64,
    pub avg_experience: f64,
    pub max_experience: i64,
    pub min_experience: i64,
}

/// Engagement summary per organisation. Average capacity is NULL for an
/// organisation with no events.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrganisationEventSummary {
    pub org_name: String,
    pub org_type: String,
    pub total_events: i64,
    pub unique_volunteers: i64,
    pub total_registrations: i64,
    pub avg_event_capacity: Option<f64>,
}

/// One registration of a volunteer for an event of a given organisation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventVolunteer {
    pub volunteer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub location: String,
    pub registration_date: NaiveDateTime,
    pub attendance_status: String,
    pub org_name: String,
}
