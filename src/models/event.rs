use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event row joined with its owning organisation. Events are never
/// displayed without the organisation name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventWithOrganisation {
    pub event_id: i64,
    pub event_name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub max_volunteers: i64,
    pub org_id: i64,
    pub org_name: String,
}
