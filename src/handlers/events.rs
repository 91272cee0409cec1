use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    errors::AppError,
    extractors::ValidatedJson,
    models::{Event, Invitation},
    staffing::StaffingSummary,
    state::AppState,
    types::{
        CancelReport, CloseReport, ConfirmDirectPayload, ConfirmDirectReport, CreateEventPayload,
        InvitationSendReport, ManualAssignmentPayload, ManualAssignmentReport, ReminderReport,
        ReplaceSkipperPayload, ReplaceSkipperReport, SendInvitationsPayload, StaffingReport,
        UpdateEventPayload,
    },
    workflow,
};

pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    let tables = state.store.read().await;
    Json(tables.events.values().cloned().collect())
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<Event>, AppError> {
    let tables = state.store.read().await;
    Ok(Json(tables.event(event_id)?.clone()))
}

pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEventPayload>,
) -> Result<Json<Event>, AppError> {
    let event = workflow::create_event(&state.store, payload).await?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateEventPayload>,
) -> Result<Json<Event>, AppError> {
    let event = workflow::update_event(&state.store, event_id, payload).await?;
    Ok(Json(event))
}

pub async fn cancel_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<CancelReport>, AppError> {
    let report =
        workflow::cancel_event(&state.store, state.mailer.as_ref(), &state.notifier, event_id)
            .await?;
    Ok(Json(report))
}

/// The staffing badges read model, derived from the same summary the
/// workflow guards use.
pub async fn get_staffing(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<StaffingReport>, AppError> {
    let tables = state.store.read().await;
    let event = tables.event(event_id)?;
    Ok(Json(StaffingSummary::for_event(event).into()))
}

pub async fn send_invitations(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<SendInvitationsPayload>,
) -> Result<Json<InvitationSendReport>, AppError> {
    let report = workflow::send_invitations(
        &state.store,
        state.mailer.as_ref(),
        &state.notifier,
        event_id,
        payload,
    )
    .await?;
    Ok(Json(report))
}

pub async fn list_invitations(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<Vec<Invitation>>, AppError> {
    let tables = state.store.read().await;
    Ok(Json(tables.event(event_id)?.invitations.clone()))
}

pub async fn send_reminder(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<ReminderReport>, AppError> {
    let report =
        workflow::send_event_reminder(&state.store, state.mailer.as_ref(), event_id).await?;
    Ok(Json(report))
}

pub async fn confirm_direct(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ConfirmDirectPayload>,
) -> Result<Json<ConfirmDirectReport>, AppError> {
    let report = workflow::confirm_direct(
        &state.store,
        state.mailer.as_ref(),
        &state.notifier,
        event_id,
        payload,
    )
    .await?;
    Ok(Json(report))
}

pub async fn close_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<CloseReport>, AppError> {
    let report =
        workflow::close_event(&state.store, state.mailer.as_ref(), &state.notifier, event_id)
            .await?;
    Ok(Json(report))
}

pub async fn assign_manual(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ManualAssignmentPayload>,
) -> Result<Json<ManualAssignmentReport>, AppError> {
    let report = workflow::assign_manual(
        &state.store,
        state.mailer.as_ref(),
        &state.notifier,
        event_id,
        payload,
    )
    .await?;
    Ok(Json(report))
}

pub async fn replace_skipper(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ReplaceSkipperPayload>,
) -> Result<Json<ReplaceSkipperReport>, AppError> {
    let report = workflow::replace_skipper(
        &state.store,
        state.mailer.as_ref(),
        &state.notifier,
        event_id,
        payload,
    )
    .await?;
    Ok(Json(report))
}
