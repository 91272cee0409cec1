use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bell-feed record. Items are persisted in the store and additionally
/// broadcast on the live channel; the store copy is the record of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: i64,
    pub kind: String,
    pub message: String,
    pub event_id: Option<i64>,
    pub invitation_id: Option<i64>,
    pub skipper_id: Option<i64>,
    pub response_status: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
