use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single user's long-term goal and streak.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub goal: Option<String>,
    pub deadline: Option<String>,
    pub current_streak: i64,
    pub last_completion_date: Option<String>,
}
