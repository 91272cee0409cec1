//! Outbound mail. The workflow only ever talks to [`EmailDispatcher`];
//! delivery is best-effort and every operation tallies per-recipient
//! success/failure instead of failing the state change.

use async_trait::async_trait;
use resend_rs::{Resend, types::CreateEmailBaseOptions};
use thiserror::Error;

use crate::models::{Event, InvitationRole, Skipper};

#[derive(Debug, Error)]
#[error("email delivery failed: {0}")]
pub struct EmailError(pub String);

#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn deliver(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError>;

    async fn send_invitation(
        &self,
        skipper: &Skipper,
        event: &Event,
        role: InvitationRole,
    ) -> Result<(), EmailError> {
        let subject = format!("Uitnodiging: {} op {}", event.event_name, event.event_date);
        let html = format!(
            "<p>Beste {},</p><p>Je bent uitgenodigd als {} voor <strong>{}</strong> \
             ({}) op {}. Laat ons weten of je beschikbaar bent.</p>",
            skipper.first_name, role, event.event_name, event.company_name, event.event_date,
        );
        self.deliver(&skipper.email, &subject, &html).await
    }

    async fn send_confirmation(
        &self,
        skipper: &Skipper,
        event: &Event,
        role: InvitationRole,
    ) -> Result<(), EmailError> {
        let subject = format!("Bevestiging: {} op {}", event.event_name, event.event_date);
        let html = format!(
            "<p>Beste {},</p><p>Je bent bevestigd als {} voor <strong>{}</strong> op {}.</p>",
            skipper.first_name, role, event.event_name, event.event_date,
        );
        self.deliver(&skipper.email, &subject, &html).await
    }

    async fn send_cancellation(
        &self,
        skipper: &Skipper,
        event: &Event,
        reason: Option<&str>,
    ) -> Result<(), EmailError> {
        let subject = format!("Afzegging: {} op {}", event.event_name, event.event_date);
        let reason_line = match reason {
            Some(reason) => format!("<p>Reden: {}</p>", reason),
            None => String::new(),
        };
        let html = format!(
            "<p>Beste {},</p><p>Je inzet voor <strong>{}</strong> op {} gaat niet door.</p>{}",
            skipper.first_name, event.event_name, event.event_date, reason_line,
        );
        self.deliver(&skipper.email, &subject, &html).await
    }

    async fn send_reminder(&self, skipper: &Skipper, event: &Event) -> Result<(), EmailError> {
        let subject = format!("Herinnering: {} op {}", event.event_name, event.event_date);
        let html = format!(
            "<p>Beste {},</p><p>We wachten nog op je reactie voor <strong>{}</strong> op {}.</p>",
            skipper.first_name, event.event_name, event.event_date,
        );
        self.deliver(&skipper.email, &subject, &html).await
    }

    async fn send_not_selected(&self, skipper: &Skipper, event: &Event) -> Result<(), EmailError> {
        let subject = format!("Indeling rond: {} op {}", event.event_name, event.event_date);
        let html = format!(
            "<p>Beste {},</p><p>De indeling voor <strong>{}</strong> op {} is rond; \
             deze keer hebben we je niet ingedeeld. Bedankt voor je reactie!</p>",
            skipper.first_name, event.event_name, event.event_date,
        );
        self.deliver(&skipper.email, &subject, &html).await
    }
}

pub struct ResendMailer {
    resend: Resend,
    from: String,
}

impl ResendMailer {
    pub fn new(api_key: &str, from: String) -> Self {
        ResendMailer {
            resend: Resend::new(api_key),
            from,
        }
    }
}

#[async_trait]
impl EmailDispatcher for ResendMailer {
    async fn deliver(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError> {
        let email = CreateEmailBaseOptions::new(&self.from, vec![to], subject).with_html(html);
        self.resend.emails.send(email).await.map_err(|e| {
            tracing::error!("Email send error: {:?}", e);
            EmailError(e.to_string())
        })?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentEmail {
        pub to: String,
        pub subject: String,
    }

    /// Records every delivery attempt; addresses in `failing` bounce.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<SentEmail>>,
        pub failing: Mutex<HashSet<String>>,
    }

    impl RecordingMailer {
        pub fn fail_for(&self, address: &str) {
            self.failing.lock().unwrap().insert(address.to_string());
        }

        pub fn sent_to(&self, address: &str) -> usize {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .filter(|mail| mail.to == address)
                .count()
        }
    }

    #[async_trait]
    impl EmailDispatcher for RecordingMailer {
        async fn deliver(&self, to: &str, subject: &str, _html: &str) -> Result<(), EmailError> {
            self.sent.lock().unwrap().push(SentEmail {
                to: to.to_string(),
                subject: subject.to_string(),
            });
            if self.failing.lock().unwrap().contains(to) {
                return Err(EmailError(format!("scripted bounce for {to}")));
            }
            Ok(())
        }
    }
}
