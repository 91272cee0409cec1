use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Boat, Invitation, Skipper};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDuration {
    HalfDay,
    Morning,
    Afternoon,
    FullDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    Invitation,
    Finalized,
}

/// Legacy availability answer kept on EventBoat for events created before
/// the invitation workflow existed. New events track availability on
/// Invitation records instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Pending,
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBoat {
    pub id: i64,
    pub boat: Boat,
    pub skipper: Option<Skipper>,
    pub response_status: ResponseStatus,
    pub email_sent_at: Option<DateTime<Utc>>,
    pub response_received_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub event_name: String,
    pub company_name: String,
    pub event_date: NaiveDate,
    pub duration: EventDuration,
    pub event_type: String,
    pub notes: Option<String>,
    pub required_race_directors: u32,
    pub required_coaches: u32,
    pub workflow_phase: WorkflowPhase,
    pub event_boats: Vec<EventBoat>,
    pub invitations: Vec<Invitation>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn is_finalized(&self) -> bool {
        self.workflow_phase == WorkflowPhase::Finalized
    }

    pub fn invitation(&self, invitation_id: i64) -> Option<&Invitation> {
        self.invitations.iter().find(|inv| inv.id == invitation_id)
    }

    pub fn invitation_mut(&mut self, invitation_id: i64) -> Option<&mut Invitation> {
        self.invitations
            .iter_mut()
            .find(|inv| inv.id == invitation_id)
    }

    /// The one non-replaced invitation held by this skipper, if any.
    pub fn active_invitation_for(&self, skipper_id: i64) -> Option<&Invitation> {
        self.invitations
            .iter()
            .find(|inv| inv.is_active() && inv.skipper.id == skipper_id)
    }

    pub fn event_boat_mut(&mut self, boat_id: i64) -> Option<&mut EventBoat> {
        self.event_boats.iter_mut().find(|eb| eb.boat.id == boat_id)
    }
}
