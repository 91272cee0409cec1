//! Event phase control: creation, phase-guarded editing, closing into the
//! finalized phase and cancellation.

use chrono::Utc;

use crate::{
    email::EmailDispatcher,
    errors::AppError,
    models::{
        Event, EventBoat, InvitationStatus, ResponseStatus, Skipper, WorkflowPhase,
    },
    notify::Notifier,
    staffing::StaffingSummary,
    store::Store,
    types::{
        CancelReport, CloseReport, CreateEventPayload, EmailTally, ManualAssignmentPayload,
        ManualAssignmentReport, UpdateEventPayload,
    },
};

fn build_event_boats(
    tables: &mut crate::store::Tables,
    boat_ids: &[i64],
) -> Result<Vec<EventBoat>, AppError> {
    // Validate the full list before allocating anything. A repeated boat
    // would count twice toward the skipper quota.
    for (idx, &boat_id) in boat_ids.iter().enumerate() {
        let boat = tables.boat(boat_id)?;
        if !boat.is_active {
            return Err(AppError::Validation(format!(
                "boat {} is deactivated and cannot be scheduled",
                boat.name
            )));
        }
        if boat_ids[..idx].contains(&boat_id) {
            return Err(AppError::Validation(format!(
                "boat {} is listed more than once",
                boat.name
            )));
        }
    }
    let boats: Vec<_> = boat_ids
        .iter()
        .map(|id| tables.boat(*id).cloned())
        .collect::<Result<_, _>>()?;
    Ok(boats
        .into_iter()
        .map(|boat| EventBoat {
            id: tables.next_id(),
            boat,
            skipper: None,
            response_status: ResponseStatus::Pending,
            email_sent_at: None,
            response_received_at: None,
        })
        .collect())
}

/// Creates an event in the `invitation` phase. Invitations are sent
/// separately, so the event exists regardless of any email outcome.
pub async fn create_event(store: &Store, payload: CreateEventPayload) -> Result<Event, AppError> {
    let mut tables = store.write().await;

    let event_boats = build_event_boats(&mut tables, &payload.boat_ids)?;
    let id = tables.next_id();
    let event = Event {
        id,
        event_name: payload.event_name,
        company_name: payload.company_name,
        event_date: payload.event_date,
        duration: payload.duration,
        event_type: payload.event_type,
        notes: payload.notes,
        required_race_directors: payload.required_race_directors,
        required_coaches: payload.required_coaches,
        workflow_phase: WorkflowPhase::Invitation,
        event_boats,
        invitations: Vec::new(),
        created_at: Utc::now(),
    };
    tables.events.insert(id, event.clone());
    Ok(event)
}

/// Edits core fields. Only legal in the `invitation` phase; a finalized
/// event is immutable. When the boat list changes, boats that stay keep
/// their EventBoat record (and legacy response), removed ones are dropped
/// and new ones start out pending.
pub async fn update_event(
    store: &Store,
    event_id: i64,
    payload: UpdateEventPayload,
) -> Result<Event, AppError> {
    let mut tables = store.write().await;

    let event = tables.event(event_id)?;
    if event.is_finalized() {
        return Err(AppError::EventFinalized);
    }

    let new_boats = match &payload.boat_ids {
        Some(boat_ids) => {
            let kept: Vec<i64> = event
                .event_boats
                .iter()
                .map(|eb| eb.boat.id)
                .filter(|id| boat_ids.contains(id))
                .collect();
            let added: Vec<i64> = boat_ids
                .iter()
                .copied()
                .filter(|id| !kept.contains(id))
                .collect();
            Some((kept, build_event_boats(&mut tables, &added)?))
        }
        None => None,
    };

    let event = tables.event_mut(event_id)?;
    event.event_name = payload.event_name;
    event.company_name = payload.company_name;
    event.event_date = payload.event_date;
    event.duration = payload.duration;
    event.event_type = payload.event_type;
    event.notes = payload.notes;
    event.required_race_directors = payload.required_race_directors;
    event.required_coaches = payload.required_coaches;
    if let Some((kept, added)) = new_boats {
        event.event_boats.retain(|eb| kept.contains(&eb.boat.id));
        event.event_boats.extend(added);
    }

    Ok(event.clone())
}

/// Transitions `invitation` → `finalized`. Only legal once every role quota
/// is fully confirmed. Invitees who responded but were not chosen get a
/// closing notice, best-effort.
pub async fn close_event(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    notifier: &Notifier,
    event_id: i64,
) -> Result<CloseReport, AppError> {
    let mut tables = store.write().await;

    let event = tables.event_mut(event_id)?;
    if event.is_finalized() {
        return Err(AppError::EventFinalized);
    }
    if !StaffingSummary::for_event(event).is_all_confirmed() {
        return Err(AppError::NotAllConfirmed);
    }

    event.workflow_phase = WorkflowPhase::Finalized;
    let not_chosen: Vec<Skipper> = event
        .invitations
        .iter()
        .filter(|inv| {
            inv.is_active()
                && matches!(
                    inv.status,
                    InvitationStatus::Available | InvitationStatus::Maybe
                )
        })
        .map(|inv| inv.skipper.clone())
        .collect();
    let event_snapshot = event.clone();

    let note = tables.push_notification(
        "event_closed",
        format!("{} is finalized", event_snapshot.event_name),
        Some(event_id),
        None,
        None,
        None,
    );
    drop(tables);
    notifier.publish(note);

    let mut emails = EmailTally::default();
    for skipper in &not_chosen {
        let delivered = match mailer.send_not_selected(skipper, &event_snapshot).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("closing notice to {} failed: {e}", skipper.email);
                false
            }
        };
        emails.record(&skipper.email, delivered);
    }

    Ok(CloseReport {
        message: format!("{} is finalized", event_snapshot.event_name),
        emails,
    })
}

/// Deletes the event outright (cancellation is not a phase) and mails
/// everyone who had committed: invitees who answered available or confirmed,
/// or the assigned skippers with a legacy "yes".
pub async fn cancel_event(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    notifier: &Notifier,
    event_id: i64,
) -> Result<CancelReport, AppError> {
    let mut tables = store.write().await;

    let event = tables.remove_event(event_id)?;
    let recipients: Vec<Skipper> = if event.invitations.is_empty() {
        event
            .event_boats
            .iter()
            .filter(|eb| eb.response_status == ResponseStatus::Yes)
            .filter_map(|eb| eb.skipper.clone())
            .collect()
    } else {
        event
            .invitations
            .iter()
            .filter(|inv| {
                inv.is_active()
                    && matches!(
                        inv.status,
                        InvitationStatus::Available | InvitationStatus::Confirmed
                    )
            })
            .map(|inv| inv.skipper.clone())
            .collect()
    };

    let note = tables.push_notification(
        "event_cancelled",
        format!("{} is cancelled", event.event_name),
        Some(event_id),
        None,
        None,
        None,
    );
    drop(tables);
    notifier.publish(note);

    let mut emails = EmailTally::default();
    for skipper in &recipients {
        let delivered = match mailer.send_cancellation(skipper, &event, None).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("cancellation email to {} failed: {e}", skipper.email);
                false
            }
        };
        emails.record(&skipper.email, delivered);
    }

    Ok(CancelReport {
        message: format!("{} is cancelled", event.event_name),
        deleted: true,
        cancellation_emails: emails,
    })
}

/// Places a skipper directly on one of the event's boats. Used for roster
/// fixes and legacy events; works in either phase. The target boat must not
/// already carry a skipper.
pub async fn assign_manual(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    notifier: &Notifier,
    event_id: i64,
    payload: ManualAssignmentPayload,
) -> Result<ManualAssignmentReport, AppError> {
    let mut tables = store.write().await;

    let skipper = tables.skipper(payload.skipper_id)?.clone();
    let event = tables.event_mut(event_id)?;
    let event_boat = event
        .event_boat_mut(payload.boat_id)
        .ok_or_else(|| AppError::Validation("boat is not part of this event".to_string()))?;
    if event_boat.skipper.is_some() {
        return Err(AppError::Validation(
            "boat already has a skipper assigned".to_string(),
        ));
    }
    event_boat.skipper = Some(skipper.clone());
    let event_boat_id = event_boat.id;
    let boat_name = event_boat.boat.name.clone();
    let event_snapshot = event.clone();

    let note = tables.push_notification(
        "manual_assignment",
        format!(
            "{} assigned to {} for {}",
            skipper.full_name(),
            boat_name,
            event_snapshot.event_name
        ),
        Some(event_id),
        None,
        Some(skipper.id),
        None,
    );
    drop(tables);
    notifier.publish(note);

    let notification_sent = match mailer
        .send_confirmation(&skipper, &event_snapshot, payload.role)
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("assignment email to {} failed: {e}", skipper.email);
            false
        }
    };

    Ok(ManualAssignmentReport {
        message: format!("{} assigned", skipper.full_name()),
        event_boat_id,
        notification_sent,
    })
}
