//! Quota arithmetic for event staffing. Both the HTTP read model and the
//! workflow guards derive completeness from [`StaffingSummary::for_event`],
//! so there is exactly one definition of "this event is done".

use serde::Serialize;

use crate::models::{Event, EventBoat, Invitation, InvitationRole, InvitationStatus, ResponseStatus};

/// The quota bucket an invitation role counts toward. Head skippers fill a
/// skipper slot like any other skipper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    Skipper,
    RaceDirector,
    Coach,
}

impl RoleGroup {
    pub fn of(role: InvitationRole) -> Self {
        match role {
            InvitationRole::Skipper | InvitationRole::HeadSkipper => RoleGroup::Skipper,
            InvitationRole::RaceDirector => RoleGroup::RaceDirector,
            InvitationRole::Coach => RoleGroup::Coach,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleGroup::Skipper => "skippers",
            RoleGroup::RaceDirector => "race directors",
            RoleGroup::Coach => "coaches",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub required: u32,
    pub available: u32,
    pub confirmed: u32,
}

impl GroupCount {
    /// Confirmations still needed before this group's quota is full.
    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.confirmed)
    }
}

/// Where availability answers live for an event. Branch once, at load time;
/// call sites never inspect "does this event have invitations" themselves.
enum StaffingSource<'a> {
    Invitations(&'a [Invitation]),
    LegacyBoats(&'a [EventBoat]),
}

impl<'a> StaffingSource<'a> {
    fn for_event(event: &'a Event) -> Self {
        if event.invitations.is_empty() {
            StaffingSource::LegacyBoats(&event.event_boats)
        } else {
            StaffingSource::Invitations(&event.invitations)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaffingSummary {
    pub skippers: GroupCount,
    pub race_directors: GroupCount,
    pub coaches: GroupCount,
}

impl StaffingSummary {
    pub fn for_event(event: &Event) -> Self {
        let required_skippers = event.event_boats.len() as u32;

        match StaffingSource::for_event(event) {
            StaffingSource::Invitations(invitations) => {
                let mut skippers = GroupCount {
                    required: required_skippers,
                    ..GroupCount::default()
                };
                let mut race_directors = GroupCount {
                    required: event.required_race_directors,
                    ..GroupCount::default()
                };
                let mut coaches = GroupCount {
                    required: event.required_coaches,
                    ..GroupCount::default()
                };

                for inv in invitations.iter().filter(|inv| inv.is_active()) {
                    let count = match RoleGroup::of(inv.role) {
                        RoleGroup::Skipper => &mut skippers,
                        RoleGroup::RaceDirector => &mut race_directors,
                        RoleGroup::Coach => &mut coaches,
                    };
                    match inv.status {
                        InvitationStatus::Available => count.available += 1,
                        InvitationStatus::Confirmed => {
                            count.available += 1;
                            count.confirmed += 1;
                        }
                        _ => {}
                    }
                }

                StaffingSummary {
                    skippers,
                    race_directors,
                    coaches,
                }
            }
            StaffingSource::LegacyBoats(boats) => {
                // Pre-migration events only ever collected a yes/no per boat;
                // a "yes" is both the availability and the commitment.
                let yes = boats
                    .iter()
                    .filter(|eb| eb.response_status == ResponseStatus::Yes)
                    .count() as u32;
                StaffingSummary {
                    skippers: GroupCount {
                        required: required_skippers,
                        available: yes,
                        confirmed: yes,
                    },
                    race_directors: GroupCount::default(),
                    coaches: GroupCount::default(),
                }
            }
        }
    }

    pub fn group(&self, group: RoleGroup) -> &GroupCount {
        match group {
            RoleGroup::Skipper => &self.skippers,
            RoleGroup::RaceDirector => &self.race_directors,
            RoleGroup::Coach => &self.coaches,
        }
    }

    /// Every role quota is covered by people who said yes. An event with
    /// zero boats can never be complete.
    pub fn is_complete(&self) -> bool {
        self.skippers.required > 0
            && self.skippers.available >= self.skippers.required
            && self.race_directors.available >= self.race_directors.required
            && self.coaches.available >= self.coaches.required
    }

    /// Every role quota is covered by confirmed people. Implies
    /// [`is_complete`](Self::is_complete) since confirmed counts toward
    /// available.
    pub fn is_all_confirmed(&self) -> bool {
        self.skippers.required > 0
            && self.skippers.confirmed >= self.skippers.required
            && self.race_directors.confirmed >= self.race_directors.required
            && self.coaches.confirmed >= self.coaches.required
    }
}
