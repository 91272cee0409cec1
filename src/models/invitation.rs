use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Skipper;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationRole {
    Skipper,
    HeadSkipper,
    RaceDirector,
    Coach,
}

impl std::fmt::Display for InvitationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            InvitationRole::Skipper => "schipper",
            InvitationRole::HeadSkipper => "hoofdschipper",
            InvitationRole::RaceDirector => "wedstrijdleider",
            InvitationRole::Coach => "coach",
        };
        write!(f, "{label}")
    }
}

/// `Replaced` is terminal: it is only set by the replacement protocol and
/// keeps the record around as an audit trail. Replaced invitations never
/// count toward quotas and do not block re-inviting that skipper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Available,
    Unavailable,
    Maybe,
    Confirmed,
    Replaced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    pub skipper: Skipper,
    pub role: InvitationRole,
    pub status: InvitationStatus,
    pub invitation_sent_at: Option<DateTime<Utc>>,
    pub response_received_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// An active invitation is any that has not been retired by the
    /// replacement protocol. At most one active invitation may exist per
    /// (event, skipper).
    pub fn is_active(&self) -> bool {
        self.status != InvitationStatus::Replaced
    }
}
