//! Post-finalization skipper replacement. The swap (retire + create) is the
//! atomic, authoritative action; the two emails afterwards are best-effort
//! and reported independently.

use chrono::Utc;

use crate::{
    email::EmailDispatcher,
    errors::{AppError, Resource},
    models::{Invitation, InvitationStatus},
    notify::Notifier,
    store::Store,
    types::{ReplaceSkipperPayload, ReplaceSkipperReport},
};

pub async fn replace_skipper(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    notifier: &Notifier,
    event_id: i64,
    payload: ReplaceSkipperPayload,
) -> Result<ReplaceSkipperReport, AppError> {
    let mut tables = store.write().await;

    // Validate everything before touching anything: no partial swap.
    let event = tables.event(event_id)?;
    if !event.is_finalized() {
        return Err(AppError::Validation(
            "replacement is only available on finalized events".to_string(),
        ));
    }
    let original = event
        .invitation(payload.original_invitation_id)
        .ok_or(AppError::ResourceNotFound(Resource::Invitation))?;
    if original.status != InvitationStatus::Confirmed {
        return Err(AppError::Validation(
            "only confirmed invitations can be replaced".to_string(),
        ));
    }
    let role = original.role;
    let original_holder = original.skipper.clone();
    let replacement = tables.skipper(payload.replacement_skipper_id)?.clone();
    if event
        .active_invitation_for(payload.replacement_skipper_id)
        .is_some()
    {
        return Err(AppError::DuplicateInvitation(replacement.full_name()));
    }

    let now = Utc::now();
    let replacement_invitation_id = tables.next_id();
    let event = tables.event_mut(event_id)?;
    event
        .invitation_mut(payload.original_invitation_id)
        .ok_or(AppError::ResourceNotFound(Resource::Invitation))?
        .status = InvitationStatus::Replaced;
    event.invitations.push(Invitation {
        id: replacement_invitation_id,
        skipper: replacement.clone(),
        role,
        status: InvitationStatus::Confirmed,
        invitation_sent_at: Some(now),
        response_received_at: Some(now),
    });
    let event_snapshot = event.clone();

    let note = tables.push_notification(
        "skipper_replaced",
        format!(
            "{} replaced by {} for {} ({})",
            original_holder.full_name(),
            replacement.full_name(),
            event_snapshot.event_name,
            payload.replacement_reason
        ),
        Some(event_id),
        Some(replacement_invitation_id),
        Some(replacement.id),
        None,
    );
    drop(tables);
    notifier.publish(note);

    let cancellation_email_sent = match mailer
        .send_cancellation(
            &original_holder,
            &event_snapshot,
            Some(&payload.replacement_reason),
        )
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                "replacement cancellation email to {} failed: {e}",
                original_holder.email
            );
            false
        }
    };
    let confirmation_email_sent = match mailer
        .send_confirmation(&replacement, &event_snapshot, role)
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                "replacement confirmation email to {} failed: {e}",
                replacement.email
            );
            false
        }
    };

    Ok(ReplaceSkipperReport {
        message: format!(
            "{} replaced by {}",
            original_holder.full_name(),
            replacement.full_name()
        ),
        original_invitation_id: payload.original_invitation_id,
        replacement_invitation_id,
        cancellation_email_sent,
        confirmation_email_sent,
    })
}
