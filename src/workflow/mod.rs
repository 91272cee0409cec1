//! The staffing workflow engine: invitation lifecycle, phase transitions and
//! the replacement protocol. Every operation here is one atomic
//! check-then-act against the store; emails go out after the state change
//! commits and are tallied into the operation's report.

pub mod invitations;
pub mod phase;
pub mod replacement;

pub use invitations::{
    confirm_direct, confirm_invitation, respond, send_event_reminder, send_invitation_reminder,
    send_invitations,
};
pub use phase::{assign_manual, cancel_event, close_event, create_event, update_event};
pub use replacement::replace_skipper;

#[cfg(test)]
pub(crate) mod testkit {
    use chrono::NaiveDate;

    use crate::{
        models::{Boat, Event, InvitationRole, InvitationStatus, Ownership, Skipper},
        notify::Notifier,
        store::Store,
        types::{CreateEventPayload, SendInvitationsPayload},
    };

    use super::{create_event, respond, send_invitations};
    use crate::email::testing::RecordingMailer;
    use crate::types::ResponseAnswer;

    pub struct Harness {
        pub store: Store,
        pub mailer: RecordingMailer,
        pub notifier: Notifier,
    }

    impl Harness {
        pub fn new() -> Self {
            Harness {
                store: Store::new(),
                mailer: RecordingMailer::default(),
                notifier: Notifier::new(),
            }
        }

        pub async fn add_boat(&self, name: &str) -> i64 {
            let mut tables = self.store.write().await;
            let id = tables.next_id();
            tables.boats.insert(
                id,
                Boat {
                    id,
                    name: name.to_string(),
                    capacity: 8,
                    boat_type: "Valk".into(),
                    intern_extern: Ownership::Intern,
                    is_active: true,
                },
            );
            id
        }

        pub async fn add_skipper(&self, first_name: &str) -> i64 {
            let mut tables = self.store.write().await;
            let id = tables.next_id();
            tables.skippers.insert(
                id,
                Skipper {
                    id,
                    first_name: first_name.to_string(),
                    last_name: "Vaarder".into(),
                    email: format!("{}@example.com", first_name.to_lowercase()),
                    phone: "0600000000".into(),
                    half_day_rate: 150.0,
                    full_day_rate: 250.0,
                    notes: None,
                    is_active: true,
                    is_skipper: true,
                    is_coach: true,
                    is_race_director: true,
                },
            );
            id
        }

        pub async fn add_event(
            &self,
            boats: &[i64],
            race_directors: u32,
            coaches: u32,
        ) -> i64 {
            let payload = CreateEventPayload {
                event_name: "Bedrijfszeildag".into(),
                company_name: "Acme BV".into(),
                event_date: NaiveDate::from_ymd_opt(2026, 5, 16).unwrap(),
                duration: crate::models::EventDuration::FullDay,
                event_type: "teambuilding".into(),
                notes: None,
                required_race_directors: race_directors,
                required_coaches: coaches,
                boat_ids: boats.to_vec(),
            };
            create_event(&self.store, payload).await.unwrap().id
        }

        /// Invites the skippers in the given role and has each answer
        /// "available".
        pub async fn invite_available(
            &self,
            event_id: i64,
            skipper_ids: &[i64],
            role: InvitationRole,
        ) {
            let mut payload = SendInvitationsPayload::default();
            match role {
                InvitationRole::Skipper => payload.skipper_ids = skipper_ids.to_vec(),
                InvitationRole::HeadSkipper => payload.head_skipper_id = skipper_ids.first().copied(),
                InvitationRole::RaceDirector => payload.race_director_ids = skipper_ids.to_vec(),
                InvitationRole::Coach => payload.coach_ids = skipper_ids.to_vec(),
            }
            send_invitations(&self.store, &self.mailer, &self.notifier, event_id, payload)
                .await
                .unwrap();
            for &skipper_id in skipper_ids {
                let invitation_id = self.invitation_of(event_id, skipper_id).await;
                respond(
                    &self.store,
                    &self.notifier,
                    invitation_id,
                    ResponseAnswer::Available,
                )
                .await
                .unwrap();
            }
        }

        pub async fn invitation_of(&self, event_id: i64, skipper_id: i64) -> i64 {
            let tables = self.store.read().await;
            tables
                .event(event_id)
                .unwrap()
                .active_invitation_for(skipper_id)
                .unwrap()
                .id
        }

        pub async fn event(&self, event_id: i64) -> Event {
            self.store.read().await.event(event_id).unwrap().clone()
        }

        pub async fn invitation_status(
            &self,
            event_id: i64,
            invitation_id: i64,
        ) -> InvitationStatus {
            self.event(event_id)
                .await
                .invitation(invitation_id)
                .unwrap()
                .status
        }
    }
}
