//! # Warrior's Path — Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Response` → serialized to client JSON
//! - Required request fields are `Option` so a missing field reaches the
//!   handler and becomes a 400 instead of an extractor rejection

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::daily_record::{DailyRecord, DailyUpdate};
use crate::models::profile::UserProfile;

// ============================================================================
// Common
// ============================================================================

/// `{ "success": true }`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error envelope for every 4xx/5xx: `{ "success": false, "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

// ============================================================================
// Daily data
// ============================================================================

/// POST /api/save_daily_data
#[derive(Debug, Deserialize)]
pub struct SaveDailyDataRequest {
    pub date: Option<String>,
    pub updates: Option<Map<String, Value>>,
}

impl SaveDailyDataRequest {
    /// Both `date` and `updates` must be present. An empty `updates` object
    /// is present and valid.
    pub fn into_parts(self) -> AppResult<(String, DailyUpdate)> {
        match (non_empty(self.date), self.updates) {
            (Some(date), Some(updates)) => Ok((date, DailyUpdate::try_from(updates)?)),
            _ => Err(AppError::invalid_data()),
        }
    }
}

/// POST /api/save_journal
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJournalRequest {
    pub date: Option<String>,
    pub journal_entry: Option<String>,
}

impl SaveJournalRequest {
    /// An empty journal entry is a real value, not a missing one.
    pub fn into_parts(self) -> AppResult<(String, String)> {
        match (non_empty(self.date), self.journal_entry) {
            (Some(date), Some(entry)) => Ok((date, entry)),
            _ => Err(AppError::invalid_data()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Profile
// ============================================================================

/// POST /api/set_goal
#[derive(Debug, Default, Deserialize)]
pub struct SetGoalRequest {
    pub goal: Option<String>,
    pub deadline: Option<String>,
}

// ============================================================================
// Page
// ============================================================================

/// Data embedded into the index page on first load
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub today: String,
    pub all_data: BTreeMap<String, DailyRecord>,
    pub profile: UserProfile,
}

// ============================================================================
// System
// ============================================================================

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
