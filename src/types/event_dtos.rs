use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::{EventDuration, InvitationRole},
    staffing::StaffingSummary,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventPayload {
    #[validate(length(min = 1))]
    pub event_name: String,
    #[validate(length(min = 1))]
    pub company_name: String,
    pub event_date: NaiveDate,
    pub duration: EventDuration,
    #[validate(length(min = 1))]
    pub event_type: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub required_race_directors: u32,
    #[serde(default)]
    pub required_coaches: u32,
    #[validate(length(min = 1, message = "an event needs at least one boat"))]
    pub boat_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEventPayload {
    #[validate(length(min = 1))]
    pub event_name: String,
    #[validate(length(min = 1))]
    pub company_name: String,
    pub event_date: NaiveDate,
    pub duration: EventDuration,
    #[validate(length(min = 1))]
    pub event_type: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub required_race_directors: u32,
    #[serde(default)]
    pub required_coaches: u32,
    #[validate(length(min = 1, message = "an event needs at least one boat"))]
    pub boat_ids: Option<Vec<i64>>,
}

/// Per-recipient outcome of a batch email dispatch. The state change the
/// emails announce has already committed by the time this is produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmailTally {
    pub total: u32,
    pub sent: u32,
    pub failed: u32,
    pub failed_emails: Vec<String>,
}

impl EmailTally {
    pub fn record(&mut self, address: &str, delivered: bool) {
        self.total += 1;
        if delivered {
            self.sent += 1;
        } else {
            self.failed += 1;
            self.failed_emails.push(address.to_string());
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelReport {
    pub message: String,
    pub deleted: bool,
    pub cancellation_emails: EmailTally,
}

#[derive(Debug, Clone, Serialize)]
pub struct CloseReport {
    pub message: String,
    pub emails: EmailTally,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ManualAssignmentPayload {
    pub skipper_id: i64,
    pub boat_id: i64,
    pub role: InvitationRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManualAssignmentReport {
    pub message: String,
    pub event_boat_id: i64,
    pub notification_sent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupStatus {
    pub required: u32,
    pub available: u32,
    pub confirmed: u32,
    pub remaining: u32,
}

/// Read model behind the staffing badges; derived entirely from one
/// [`StaffingSummary`] so the UI and the workflow guards can never disagree.
#[derive(Debug, Clone, Serialize)]
pub struct StaffingReport {
    pub skippers: GroupStatus,
    pub race_directors: GroupStatus,
    pub coaches: GroupStatus,
    pub is_complete: bool,
    pub is_all_confirmed: bool,
}

impl From<StaffingSummary> for StaffingReport {
    fn from(summary: StaffingSummary) -> Self {
        let status = |count: crate::staffing::GroupCount| GroupStatus {
            required: count.required,
            available: count.available,
            confirmed: count.confirmed,
            remaining: count.remaining(),
        };
        StaffingReport {
            is_complete: summary.is_complete(),
            is_all_confirmed: summary.is_all_confirmed(),
            skippers: status(summary.skippers),
            race_directors: status(summary.race_directors),
            coaches: status(summary.coaches),
        }
    }
}
