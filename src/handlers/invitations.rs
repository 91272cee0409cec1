use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    errors::AppError,
    extractors::ValidatedJson,
    models::Invitation,
    state::AppState,
    types::{ConfirmReport, ReminderReport, RespondPayload},
    workflow,
};

pub async fn confirm(
    State(state): State<AppState>,
    Path(invitation_id): Path<i64>,
) -> Result<Json<ConfirmReport>, AppError> {
    let report = workflow::confirm_invitation(
        &state.store,
        state.mailer.as_ref(),
        &state.notifier,
        invitation_id,
    )
    .await?;
    Ok(Json(report))
}

/// The invitee's answer, normally reached through the email link.
pub async fn respond(
    State(state): State<AppState>,
    Path(invitation_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<RespondPayload>,
) -> Result<Json<Invitation>, AppError> {
    let invitation =
        workflow::respond(&state.store, &state.notifier, invitation_id, payload.status).await?;
    Ok(Json(invitation))
}

pub async fn send_reminder(
    State(state): State<AppState>,
    Path(invitation_id): Path<i64>,
) -> Result<Json<ReminderReport>, AppError> {
    let report =
        workflow::send_invitation_reminder(&state.store, state.mailer.as_ref(), invitation_id)
            .await?;
    Ok(Json(report))
}
