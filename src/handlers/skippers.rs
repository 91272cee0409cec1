use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    errors::AppError,
    extractors::ValidatedJson,
    models::{InvitationStatus, Skipper},
    staffing::StaffingSummary,
    state::AppState,
    types::{SkipperOpenEvent, SkipperPayload},
};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Skipper>> {
    let tables = state.store.read().await;
    Json(tables.skippers.values().cloned().collect())
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SkipperPayload>,
) -> Result<Json<Skipper>, AppError> {
    let mut tables = state.store.write().await;
    let id = tables.next_id();
    let skipper = from_payload(id, payload);
    tables.skippers.insert(id, skipper.clone());
    Ok(Json(skipper))
}

pub async fn update(
    State(state): State<AppState>,
    Path(skipper_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<SkipperPayload>,
) -> Result<Json<Skipper>, AppError> {
    let mut tables = state.store.write().await;
    let skipper = tables.skipper_mut(skipper_id)?;
    *skipper = from_payload(skipper_id, payload);
    Ok(Json(skipper.clone()))
}

/// Events in the invitation phase on which this skipper still owes an
/// answer, with how many skipper slots are left to confirm.
pub async fn open_events(
    State(state): State<AppState>,
    Path(skipper_id): Path<i64>,
) -> Result<Json<Vec<SkipperOpenEvent>>, AppError> {
    let tables = state.store.read().await;
    tables.skipper(skipper_id)?;

    let open = tables
        .events
        .values()
        .filter(|event| !event.is_finalized())
        .filter_map(|event| {
            let invitation = event.active_invitation_for(skipper_id)?;
            if invitation.status != InvitationStatus::Pending {
                return None;
            }
            let summary = StaffingSummary::for_event(event);
            Some(SkipperOpenEvent {
                event_id: event.id,
                event_name: event.event_name.clone(),
                company_name: event.company_name.clone(),
                event_date: event.event_date,
                duration: event.duration,
                remaining_skippers: summary.skippers.remaining(),
            })
        })
        .collect();
    Ok(Json(open))
}

fn from_payload(id: i64, payload: SkipperPayload) -> Skipper {
    Skipper {
        id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        half_day_rate: payload.half_day_rate,
        full_day_rate: payload.full_day_rate,
        notes: payload.notes,
        is_active: payload.is_active,
        is_skipper: payload.is_skipper,
        is_coach: payload.is_coach,
        is_race_director: payload.is_race_director,
    }
}
