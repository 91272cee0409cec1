use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{InvitationRole, InvitationStatus};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SendInvitationsPayload {
    #[serde(default)]
    pub skipper_ids: Vec<i64>,
    pub head_skipper_id: Option<i64>,
    #[serde(default)]
    pub race_director_ids: Vec<i64>,
    #[serde(default)]
    pub coach_ids: Vec<i64>,
}

impl SendInvitationsPayload {
    /// Flattens the payload into (skipper id, role) targets, head skipper
    /// first.
    pub fn targets(&self) -> Vec<(i64, InvitationRole)> {
        let mut targets = Vec::new();
        if let Some(id) = self.head_skipper_id {
            targets.push((id, InvitationRole::HeadSkipper));
        }
        targets.extend(
            self.skipper_ids
                .iter()
                .map(|&id| (id, InvitationRole::Skipper)),
        );
        targets.extend(
            self.race_director_ids
                .iter()
                .map(|&id| (id, InvitationRole::RaceDirector)),
        );
        targets.extend(self.coach_ids.iter().map(|&id| (id, InvitationRole::Coach)));
        targets
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvitationSendReport {
    pub message: String,
    pub invitations_sent: u32,
    pub invitations_failed: u32,
    pub skippers: u32,
    pub head_skipper: u32,
    pub race_directors: u32,
    pub coaches: u32,
}

// Serialize is needed because the length validator embeds the rejected
// value in its error params.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectAssignment {
    pub skipper_id: i64,
    pub role: InvitationRole,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmDirectPayload {
    #[validate(length(min = 1, message = "at least one assignment is required"))]
    pub assignments: Vec<DirectAssignment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmDirectReport {
    pub message: String,
    pub confirmed: u32,
    pub updated: u32,
    pub total_processed: u32,
    pub emails_sent: u32,
    pub emails_failed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmReport {
    pub message: String,
    pub invitation_id: i64,
    pub confirmation_email_sent: bool,
}

/// The subset of statuses an invitee can set through the self-service link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseAnswer {
    Available,
    Unavailable,
    Maybe,
}

impl ResponseAnswer {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseAnswer::Available => "available",
            ResponseAnswer::Unavailable => "unavailable",
            ResponseAnswer::Maybe => "maybe",
        }
    }
}

impl From<ResponseAnswer> for InvitationStatus {
    fn from(answer: ResponseAnswer) -> Self {
        match answer {
            ResponseAnswer::Available => InvitationStatus::Available,
            ResponseAnswer::Unavailable => InvitationStatus::Unavailable,
            ResponseAnswer::Maybe => InvitationStatus::Maybe,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RespondPayload {
    pub status: ResponseAnswer,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderReport {
    pub message: String,
    pub sent: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceSkipperPayload {
    pub original_invitation_id: i64,
    pub replacement_skipper_id: i64,
    #[validate(length(min = 1, message = "a replacement reason is required"))]
    pub replacement_reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplaceSkipperReport {
    pub message: String,
    pub original_invitation_id: i64,
    pub replacement_invitation_id: i64,
    pub cancellation_email_sent: bool,
    pub confirmation_email_sent: bool,
}
