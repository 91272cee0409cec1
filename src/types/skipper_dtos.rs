use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::EventDuration;

/// Create and full-update share one shape; edits always send the whole
/// record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SkipperPayload {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[validate(range(min = 0.0))]
    pub half_day_rate: f64,
    #[validate(range(min = 0.0))]
    pub full_day_rate: f64,
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_skipper: bool,
    #[serde(default)]
    pub is_coach: bool,
    #[serde(default)]
    pub is_race_director: bool,
}

/// An event in the invitation phase on which this skipper still has a
/// pending invitation.
#[derive(Debug, Clone, Serialize)]
pub struct SkipperOpenEvent {
    pub event_id: i64,
    pub event_name: String,
    pub company_name: String,
    pub event_date: NaiveDate,
    pub duration: EventDuration,
    pub remaining_skippers: u32,
}

fn default_true() -> bool {
    true
}
