use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub skill_id: i64,
    pub skill_name: String,
    pub skill_description: Option<String>,
    pub skill_category: String,
}

/// A volunteer matched by skill search, carrying the proficiency metadata
/// from the association row. Proficiency is a 1 (novice) to 5 (expert) scale.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkilledVolunteer {
    pub volunteer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub proficiency_level: i64,
    pub years_experience: i64,
}
