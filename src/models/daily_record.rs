use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

/// Everything tracked for one calendar day. List items are kept as opaque
/// JSON since the client owns their shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub completed_workouts: Vec<Value>,
    pub todo_list: Vec<Value>,
    pub shloka_shown: bool,
    pub run_list: Vec<Value>,
    pub physical_tasks: Vec<Value>,
    pub journal_entry: String,
}

/// Raw `daily_data` row. Columns are nullable because older databases
/// were written without defaults.
#[derive(Debug, FromRow)]
pub struct DailyRecordRow {
    pub date: String,
    pub completed_workouts: Option<String>,
    pub todo_list: Option<String>,
    pub shloka_shown: Option<i64>,
    pub run_list: Option<String>,
    pub physical_tasks: Option<String>,
    pub journal_entry: Option<String>,
}

/// Partial update for a day. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DailyUpdate {
    pub completed_workouts: Option<Vec<Value>>,
    pub todo_list: Option<Vec<Value>>,
    pub shloka_shown: Option<bool>,
    pub run_list: Option<Vec<Value>>,
    pub physical_tasks: Option<Vec<Value>>,
    pub journal_entry: Option<String>,
}

impl DailyUpdate {
    pub const FIELDS: [&'static str; 6] = [
        "completedWorkouts",
        "todoList",
        "shlokaShown",
        "runList",
        "physicalTasks",
        "journalEntry",
    ];

    pub fn journal(entry: impl Into<String>) -> Self {
        Self {
            journal_entry: Some(entry.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl TryFrom<Map<String, Value>> for DailyUpdate {
    type Error = AppError;

    fn try_from(map: Map<String, Value>) -> AppResult<Self> {
        if let Some(key) = map.keys().find(|k| !Self::FIELDS.contains(&k.as_str())) {
            return Err(AppError::UnknownField(key.clone()));
        }
        serde_json::from_value(Value::Object(map))
            .map_err(|e| AppError::Validation(format!("Invalid value in updates: {}", e)))
    }
}
