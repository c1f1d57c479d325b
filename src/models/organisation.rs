use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organisation {
    pub org_id: i64,
    pub org_name: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub org_type: String,
    pub description: Option<String>,
}
