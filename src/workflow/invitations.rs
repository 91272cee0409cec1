//! Invitation lifecycle: sending, invitee responses, staff confirmation and
//! reminders.

use chrono::Utc;

use crate::{
    email::EmailDispatcher,
    errors::{AppError, Resource},
    models::{Invitation, InvitationRole, InvitationStatus, Skipper},
    notify::Notifier,
    staffing::{RoleGroup, StaffingSummary},
    store::Store,
    types::{
        ConfirmDirectPayload, ConfirmDirectReport, ConfirmReport, InvitationSendReport,
        ReminderReport, ResponseAnswer, SendInvitationsPayload,
    },
};

/// Creates a `pending` invitation per target skipper and mails each one.
/// A target that is unknown or already holds an active invitation counts as
/// failed without affecting the rest of the batch; so does an email bounce
/// (the invitation itself stays).
pub async fn send_invitations(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    notifier: &Notifier,
    event_id: i64,
    payload: SendInvitationsPayload,
) -> Result<InvitationSendReport, AppError> {
    let mut tables = store.write().await;

    let event = tables.event(event_id)?;
    if event.is_finalized() {
        return Err(AppError::EventFinalized);
    }

    let mut report = InvitationSendReport::default();
    let mut plan: Vec<(Skipper, InvitationRole)> = Vec::new();
    for (skipper_id, role) in payload.targets() {
        let already_planned = plan.iter().any(|(s, _)| s.id == skipper_id);
        match tables.skippers.get(&skipper_id) {
            Some(skipper)
                if !already_planned && event.active_invitation_for(skipper_id).is_none() =>
            {
                plan.push((skipper.clone(), role));
            }
            _ => report.invitations_failed += 1,
        }
    }

    let now = Utc::now();
    let mut created: Vec<Invitation> = Vec::with_capacity(plan.len());
    for (skipper, role) in plan {
        let id = tables.next_id();
        created.push(Invitation {
            id,
            skipper,
            role,
            status: InvitationStatus::Pending,
            invitation_sent_at: Some(now),
            response_received_at: None,
        });
    }

    let event = tables.event_mut(event_id)?;
    event.invitations.extend(created.iter().cloned());
    let event_snapshot = event.clone();

    let note = tables.push_notification(
        "invitations_sent",
        format!(
            "{} invitations created for {}",
            created.len(),
            event_snapshot.event_name
        ),
        Some(event_id),
        None,
        None,
        None,
    );
    drop(tables);
    notifier.publish(note);

    for invitation in &created {
        match mailer
            .send_invitation(&invitation.skipper, &event_snapshot, invitation.role)
            .await
        {
            Ok(()) => {
                report.invitations_sent += 1;
                match invitation.role {
                    InvitationRole::Skipper => report.skippers += 1,
                    InvitationRole::HeadSkipper => report.head_skipper += 1,
                    InvitationRole::RaceDirector => report.race_directors += 1,
                    InvitationRole::Coach => report.coaches += 1,
                }
            }
            Err(e) => {
                tracing::warn!(
                    "invitation email to {} failed: {e}",
                    invitation.skipper.email
                );
                report.invitations_failed += 1;
            }
        }
    }

    report.message = format!(
        "{} invitations sent, {} failed",
        report.invitations_sent, report.invitations_failed
    );
    Ok(report)
}

/// The invitee's self-service answer. Legal until the invitation is
/// confirmed or replaced; people change their minds.
pub async fn respond(
    store: &Store,
    notifier: &Notifier,
    invitation_id: i64,
    answer: ResponseAnswer,
) -> Result<Invitation, AppError> {
    let mut tables = store.write().await;

    let event = tables.event_by_invitation_mut(invitation_id)?;
    let event_id = event.id;
    let event_name = event.event_name.clone();
    let invitation = event
        .invitation_mut(invitation_id)
        .ok_or(AppError::ResourceNotFound(Resource::Invitation))?;

    if matches!(
        invitation.status,
        InvitationStatus::Confirmed | InvitationStatus::Replaced
    ) {
        return Err(AppError::InvalidTransition {
            from: invitation.status,
            to: answer.into(),
        });
    }

    invitation.status = answer.into();
    invitation.response_received_at = Some(Utc::now());
    let updated = invitation.clone();

    let note = tables.push_notification(
        "invitation_response",
        format!(
            "{} responded {} to {}",
            updated.skipper.full_name(),
            answer.as_str(),
            event_name
        ),
        Some(event_id),
        Some(invitation_id),
        Some(updated.skipper.id),
        Some(answer.as_str().to_string()),
    );
    drop(tables);
    notifier.publish(note);

    Ok(updated)
}

/// Staff confirmation of a single `available` invitation. Refused when the
/// role group's quota is already fully confirmed; the remaining-count check
/// and the status write happen under one store guard.
pub async fn confirm_invitation(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    notifier: &Notifier,
    invitation_id: i64,
) -> Result<ConfirmReport, AppError> {
    let mut tables = store.write().await;

    let event = tables.event_by_invitation_mut(invitation_id)?;
    let event_id = event.id;
    let summary = StaffingSummary::for_event(event);

    let invitation = event
        .invitation_mut(invitation_id)
        .ok_or(AppError::ResourceNotFound(Resource::Invitation))?;
    if invitation.status != InvitationStatus::Available {
        return Err(AppError::InvalidTransition {
            from: invitation.status,
            to: InvitationStatus::Confirmed,
        });
    }
    let group = RoleGroup::of(invitation.role);
    if summary.group(group).remaining() == 0 {
        return Err(AppError::quota_full(group));
    }

    invitation.status = InvitationStatus::Confirmed;
    let skipper = invitation.skipper.clone();
    let role = invitation.role;
    let event_snapshot = event.clone();

    let note = tables.push_notification(
        "invitation_confirmed",
        format!(
            "{} confirmed as {} for {}",
            skipper.full_name(),
            role,
            event_snapshot.event_name
        ),
        Some(event_id),
        Some(invitation_id),
        Some(skipper.id),
        None,
    );
    drop(tables);
    notifier.publish(note);

    let email_sent = match mailer
        .send_confirmation(&skipper, &event_snapshot, role)
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("confirmation email to {} failed: {e}", skipper.email);
            false
        }
    };

    Ok(ConfirmReport {
        message: format!("{} confirmed", skipper.full_name()),
        invitation_id,
        confirmation_email_sent: email_sent,
    })
}

enum DirectAction {
    Update(i64),
    Create(Skipper, InvitationRole),
}

/// Staff manual override: confirm skippers in one batch, creating
/// invitations directly in `confirmed` for anyone not yet invited and
/// promoting existing non-terminal invitations. No quota gate; this is the
/// deliberate override path. Every processed entry gets a confirmation
/// email, best-effort.
pub async fn confirm_direct(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    notifier: &Notifier,
    event_id: i64,
    payload: ConfirmDirectPayload,
) -> Result<ConfirmDirectReport, AppError> {
    let mut tables = store.write().await;

    let event = tables.event(event_id)?;
    if event.is_finalized() {
        return Err(AppError::EventFinalized);
    }

    // Resolve every entry before touching anything; an unknown or repeated
    // skipper rejects the whole batch with no side effects. Without the
    // repeat check two Create actions for one skipper would both resolve
    // against the pre-write snapshot and leave two active invitations.
    let mut actions: Vec<DirectAction> = Vec::with_capacity(payload.assignments.len());
    let mut seen: Vec<i64> = Vec::with_capacity(payload.assignments.len());
    for assignment in &payload.assignments {
        let skipper = tables.skipper(assignment.skipper_id)?;
        if seen.contains(&assignment.skipper_id) {
            return Err(AppError::Validation(format!(
                "skipper {} appears more than once in the batch",
                skipper.full_name()
            )));
        }
        seen.push(assignment.skipper_id);
        match event.active_invitation_for(assignment.skipper_id) {
            Some(existing) => actions.push(DirectAction::Update(existing.id)),
            None => actions.push(DirectAction::Create(skipper.clone(), assignment.role)),
        }
    }

    let now = Utc::now();
    let mut new_invitations: Vec<Invitation> = Vec::new();
    let mut confirmed = 0u32;
    let mut updated = 0u32;
    for action in &actions {
        if let DirectAction::Create(skipper, role) = action {
            let id = tables.next_id();
            new_invitations.push(Invitation {
                id,
                skipper: skipper.clone(),
                role: *role,
                status: InvitationStatus::Confirmed,
                invitation_sent_at: Some(now),
                response_received_at: Some(now),
            });
            confirmed += 1;
        }
    }

    let event = tables.event_mut(event_id)?;
    let mut recipients: Vec<(Skipper, InvitationRole)> = Vec::new();
    for action in &actions {
        if let DirectAction::Update(invitation_id) = action {
            let invitation = event
                .invitation_mut(*invitation_id)
                .ok_or(AppError::ResourceNotFound(Resource::Invitation))?;
            if invitation.status != InvitationStatus::Confirmed {
                invitation.status = InvitationStatus::Confirmed;
                invitation.response_received_at = Some(now);
            }
            updated += 1;
            recipients.push((invitation.skipper.clone(), invitation.role));
        }
    }
    for invitation in &new_invitations {
        recipients.push((invitation.skipper.clone(), invitation.role));
    }
    event.invitations.extend(new_invitations);
    let event_snapshot = event.clone();

    let note = tables.push_notification(
        "direct_confirm",
        format!(
            "{} skippers directly confirmed for {}",
            recipients.len(),
            event_snapshot.event_name
        ),
        Some(event_id),
        None,
        None,
        None,
    );
    drop(tables);
    notifier.publish(note);

    let mut emails_sent = 0u32;
    let mut emails_failed = 0u32;
    for (skipper, role) in &recipients {
        match mailer.send_confirmation(skipper, &event_snapshot, *role).await {
            Ok(()) => emails_sent += 1,
            Err(e) => {
                tracing::warn!("confirmation email to {} failed: {e}", skipper.email);
                emails_failed += 1;
            }
        }
    }

    Ok(ConfirmDirectReport {
        message: format!("{} processed", recipients.len()),
        confirmed,
        updated,
        total_processed: confirmed + updated,
        emails_sent,
        emails_failed,
    })
}

/// Reminds every pending invitee of an event. Explicitly rejected when
/// nothing is pending so the caller can tell the difference from "reminded
/// zero people".
pub async fn send_event_reminder(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    event_id: i64,
) -> Result<ReminderReport, AppError> {
    let tables = store.read().await;
    let event = tables.event(event_id)?;
    let pending: Vec<Skipper> = event
        .invitations
        .iter()
        .filter(|inv| inv.status == InvitationStatus::Pending)
        .map(|inv| inv.skipper.clone())
        .collect();
    if pending.is_empty() {
        return Err(AppError::NoPendingInvitations);
    }
    let event_snapshot = event.clone();
    drop(tables);

    let mut sent = 0u32;
    let mut failed = 0u32;
    for skipper in &pending {
        match mailer.send_reminder(skipper, &event_snapshot).await {
            Ok(()) => sent += 1,
            Err(e) => {
                tracing::warn!("reminder email to {} failed: {e}", skipper.email);
                failed += 1;
            }
        }
    }

    Ok(ReminderReport {
        message: format!("{sent} reminders sent, {failed} failed"),
        sent,
        failed,
    })
}

/// Reminds a single invitee; only meaningful while their invitation is
/// still pending.
pub async fn send_invitation_reminder(
    store: &Store,
    mailer: &dyn EmailDispatcher,
    invitation_id: i64,
) -> Result<ReminderReport, AppError> {
    let tables = store.read().await;
    let event = tables
        .events
        .values()
        .find(|ev| ev.invitation(invitation_id).is_some())
        .ok_or(AppError::ResourceNotFound(Resource::Invitation))?;
    let invitation = event
        .invitation(invitation_id)
        .ok_or(AppError::ResourceNotFound(Resource::Invitation))?;
    if invitation.status != InvitationStatus::Pending {
        return Err(AppError::NoPendingInvitations);
    }
    let skipper = invitation.skipper.clone();
    let event_snapshot = event.clone();
    drop(tables);

    let (sent, failed) = match mailer.send_reminder(&skipper, &event_snapshot).await {
        Ok(()) => (1, 0),
        Err(e) => {
            tracing::warn!("reminder email to {} failed: {e}", skipper.email);
            (0, 1)
        }
    };

    Ok(ReminderReport {
        message: format!("{sent} reminders sent, {failed} failed"),
        sent,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DirectAssignment;
    use crate::workflow::testkit::Harness;

    #[tokio::test]
    async fn duplicate_invite_leaves_one_active_invitation() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;

        let payload = SendInvitationsPayload {
            skipper_ids: vec![anna],
            ..Default::default()
        };
        let first = send_invitations(&h.store, &h.mailer, &h.notifier, event_id, payload.clone())
            .await
            .unwrap();
        assert_eq!(first.invitations_sent, 1);

        let second = send_invitations(&h.store, &h.mailer, &h.notifier, event_id, payload)
            .await
            .unwrap();
        assert_eq!(second.invitations_sent, 0);
        assert_eq!(second.invitations_failed, 1);

        let event = h.event(event_id).await;
        assert_eq!(
            event
                .invitations
                .iter()
                .filter(|inv| inv.is_active() && inv.skipper.id == anna)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn email_bounce_counts_failed_but_keeps_invitation() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        h.mailer.fail_for("anna@example.com");

        let report = send_invitations(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            SendInvitationsPayload {
                skipper_ids: vec![anna],
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(report.invitations_sent, 0);
        assert_eq!(report.invitations_failed, 1);
        // The invitation itself committed regardless of the bounce.
        assert!(h.event(event_id).await.active_invitation_for(anna).is_some());
    }

    #[tokio::test]
    async fn inviting_on_finalized_event_is_rejected() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let bram = h.add_skipper("Bram").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        h.invite_available(event_id, &[anna], InvitationRole::Skipper)
            .await;
        let inv = h.invitation_of(event_id, anna).await;
        confirm_invitation(&h.store, &h.mailer, &h.notifier, inv)
            .await
            .unwrap();
        crate::workflow::close_event(&h.store, &h.mailer, &h.notifier, event_id)
            .await
            .unwrap();

        let err = send_invitations(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            SendInvitationsPayload {
                skipper_ids: vec![bram],
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::EventFinalized));
    }

    #[tokio::test]
    async fn confirm_is_refused_once_quota_is_full() {
        let h = Harness::new();
        let b1 = h.add_boat("Fok").await;
        let b2 = h.add_boat("Grootzeil").await;
        let (a, b, d) = (
            h.add_skipper("Anna").await,
            h.add_skipper("Bram").await,
            h.add_skipper("Daan").await,
        );
        let event_id = h.add_event(&[b1, b2], 0, 0).await;
        h.invite_available(event_id, &[a, b, d], InvitationRole::Skipper)
            .await;

        for skipper in [a, b] {
            let inv = h.invitation_of(event_id, skipper).await;
            confirm_invitation(&h.store, &h.mailer, &h.notifier, inv)
                .await
                .unwrap();
        }

        // Two boats, two confirmed: the third available skipper is refused.
        let inv_d = h.invitation_of(event_id, d).await;
        let err = confirm_invitation(&h.store, &h.mailer, &h.notifier, inv_d)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::QuotaFull(_)));
        assert_eq!(
            h.invitation_status(event_id, inv_d).await,
            InvitationStatus::Available
        );
    }

    #[tokio::test]
    async fn confirm_requires_an_available_response() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        send_invitations(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            SendInvitationsPayload {
                skipper_ids: vec![anna],
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // Still pending: cannot be confirmed.
        let inv = h.invitation_of(event_id, anna).await;
        let err = confirm_invitation(&h.store, &h.mailer, &h.notifier, inv)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn respond_updates_status_and_timestamp() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        send_invitations(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            SendInvitationsPayload {
                skipper_ids: vec![anna],
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let inv = h.invitation_of(event_id, anna).await;

        let updated = respond(&h.store, &h.notifier, inv, ResponseAnswer::Maybe)
            .await
            .unwrap();
        assert_eq!(updated.status, InvitationStatus::Maybe);
        assert!(updated.response_received_at.is_some());

        // Changing one's mind is allowed until confirmed.
        let updated = respond(&h.store, &h.notifier, inv, ResponseAnswer::Available)
            .await
            .unwrap();
        assert_eq!(updated.status, InvitationStatus::Available);
    }

    #[tokio::test]
    async fn confirmed_invitation_rejects_further_responses() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        h.invite_available(event_id, &[anna], InvitationRole::Skipper)
            .await;
        let inv = h.invitation_of(event_id, anna).await;
        confirm_invitation(&h.store, &h.mailer, &h.notifier, inv)
            .await
            .unwrap();

        let err = respond(&h.store, &h.notifier, inv, ResponseAnswer::Unavailable)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn confirm_direct_creates_and_updates() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let b2 = h.add_boat("Grootzeil").await;
        let anna = h.add_skipper("Anna").await;
        let bram = h.add_skipper("Bram").await;
        let event_id = h.add_event(&[boat, b2], 0, 0).await;
        // Anna was invited and answered; Bram never was.
        h.invite_available(event_id, &[anna], InvitationRole::Skipper)
            .await;

        let report = confirm_direct(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            ConfirmDirectPayload {
                assignments: vec![
                    DirectAssignment {
                        skipper_id: anna,
                        role: InvitationRole::Skipper,
                    },
                    DirectAssignment {
                        skipper_id: bram,
                        role: InvitationRole::Skipper,
                    },
                ],
            },
        )
        .await
        .unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(report.confirmed, 1);
        assert_eq!(report.total_processed, 2);
        assert_eq!(report.emails_sent, 2);

        let event = h.event(event_id).await;
        let summary = StaffingSummary::for_event(&event);
        assert!(summary.is_all_confirmed());
    }

    #[tokio::test]
    async fn confirm_direct_rejects_unknown_skipper_without_side_effects() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        h.invite_available(event_id, &[anna], InvitationRole::Skipper)
            .await;

        let err = confirm_direct(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            ConfirmDirectPayload {
                assignments: vec![
                    DirectAssignment {
                        skipper_id: anna,
                        role: InvitationRole::Skipper,
                    },
                    DirectAssignment {
                        skipper_id: 9999,
                        role: InvitationRole::Skipper,
                    },
                ],
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::ResourceNotFound(_)));

        // Anna's invitation was not promoted by the failed batch.
        let inv = h.invitation_of(event_id, anna).await;
        assert_eq!(
            h.invitation_status(event_id, inv).await,
            InvitationStatus::Available
        );
    }

    #[tokio::test]
    async fn confirm_direct_tallies_email_bounces_without_aborting() {
        let h = Harness::new();
        let b1 = h.add_boat("Fok").await;
        let b2 = h.add_boat("Grootzeil").await;
        let anna = h.add_skipper("Anna").await;
        let bram = h.add_skipper("Bram").await;
        let event_id = h.add_event(&[b1, b2], 0, 0).await;
        h.mailer.fail_for("anna@example.com");

        let report = confirm_direct(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            ConfirmDirectPayload {
                assignments: vec![
                    DirectAssignment {
                        skipper_id: anna,
                        role: InvitationRole::Skipper,
                    },
                    DirectAssignment {
                        skipper_id: bram,
                        role: InvitationRole::Skipper,
                    },
                ],
            },
        )
        .await
        .unwrap();

        assert_eq!(report.confirmed, 2);
        assert_eq!(report.emails_sent, 1);
        assert_eq!(report.emails_failed, 1);
        // Both confirmations committed regardless of the bounce.
        assert!(
            StaffingSummary::for_event(&h.event(event_id).await).is_all_confirmed()
        );
    }

    #[tokio::test]
    async fn confirm_direct_rejects_a_repeated_skipper() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let bram = h.add_skipper("Bram").await;
        let event_id = h.add_event(&[boat], 0, 0).await;

        let err = confirm_direct(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            ConfirmDirectPayload {
                assignments: vec![
                    DirectAssignment {
                        skipper_id: bram,
                        role: InvitationRole::Skipper,
                    },
                    DirectAssignment {
                        skipper_id: bram,
                        role: InvitationRole::Skipper,
                    },
                ],
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // The rejected batch left nothing behind.
        let event = h.event(event_id).await;
        assert_eq!(
            event
                .invitations
                .iter()
                .filter(|inv| inv.is_active() && inv.skipper.id == bram)
                .count(),
            0
        );
    }

    #[tokio::test]
    async fn head_skipper_listed_twice_gets_one_invitation() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;

        let report = send_invitations(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            SendInvitationsPayload {
                skipper_ids: vec![anna],
                head_skipper_id: Some(anna),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // The head skipper entry comes first; the plain one counts as failed.
        assert_eq!(report.invitations_sent, 1);
        assert_eq!(report.head_skipper, 1);
        assert_eq!(report.invitations_failed, 1);

        let event = h.event(event_id).await;
        let active: Vec<_> = event
            .invitations
            .iter()
            .filter(|inv| inv.is_active() && inv.skipper.id == anna)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].role, InvitationRole::HeadSkipper);
    }

    #[tokio::test]
    async fn reminder_is_rejected_without_pending_invitations() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        h.invite_available(event_id, &[anna], InvitationRole::Skipper)
            .await;

        let err = send_event_reminder(&h.store, &h.mailer, event_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoPendingInvitations));
    }

    #[tokio::test]
    async fn reminder_targets_only_pending_invitations() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let b2 = h.add_boat("Grootzeil").await;
        let anna = h.add_skipper("Anna").await;
        let bram = h.add_skipper("Bram").await;
        let event_id = h.add_event(&[boat, b2], 0, 0).await;
        h.invite_available(event_id, &[anna], InvitationRole::Skipper)
            .await;
        send_invitations(
            &h.store,
            &h.mailer,
            &h.notifier,
            event_id,
            SendInvitationsPayload {
                skipper_ids: vec![bram],
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let before = h.mailer.sent_to("bram@example.com");

        let report = send_event_reminder(&h.store, &h.mailer, event_id)
            .await
            .unwrap();
        assert_eq!(report.sent, 1);
        assert_eq!(h.mailer.sent_to("bram@example.com"), before + 1);
    }

    #[tokio::test]
    async fn single_reminder_requires_pending_status() {
        let h = Harness::new();
        let boat = h.add_boat("Fok").await;
        let anna = h.add_skipper("Anna").await;
        let event_id = h.add_event(&[boat], 0, 0).await;
        h.invite_available(event_id, &[anna], InvitationRole::Skipper)
            .await;
        let inv = h.invitation_of(event_id, anna).await;

        let err = send_invitation_reminder(&h.store, &h.mailer, inv)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoPendingInvitations));
    }
}
