use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointment {
    pub customer: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
