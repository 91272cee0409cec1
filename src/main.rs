mod email;
mod errors;
mod extractors;
mod handlers;
mod models;
mod notify;
mod staffing;
mod state;
mod store;
mod types;
mod workflow;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post, put},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    email::ResendMailer, handlers::*, notify::Notifier, state::AppState, store::Store,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let resend_api_key = std::env::var("RESEND_API_KEY").expect("RESEND_API_KEY must be set");
    let mail_from = std::env::var("MAIL_FROM")
        .unwrap_or_else(|_| "Vlootplan <noreply@vlootplan.nl>".to_string());

    let app_state = AppState {
        store: Arc::new(Store::new()),
        mailer: Arc::new(ResendMailer::new(&resend_api_key, mail_from)),
        notifier: Notifier::new(),
    };

    let app = Router::new()
        // Boats
        .route("/api/boats", get(boats::list).post(boats::create))
        .route("/api/boats/{id}", put(boats::update))
        .route("/api/boats/{id}/toggle", patch(boats::toggle))
        // Skippers
        .route("/api/skippers", get(skippers::list).post(skippers::create))
        .route("/api/skippers/{id}", put(skippers::update))
        .route("/api/skippers/{id}/open-events", get(skippers::open_events))
        // Events and the staffing workflow
        .route("/api/events", get(events::list_events).post(events::create_event))
        .route(
            "/api/events/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::cancel_event),
        )
        .route("/api/events/{id}/staffing", get(events::get_staffing))
        .route(
            "/api/events/{id}/invitations",
            get(events::list_invitations).post(events::send_invitations),
        )
        .route(
            "/api/events/{id}/invitations/send-reminder",
            post(events::send_reminder),
        )
        .route("/api/events/{id}/confirm-direct", post(events::confirm_direct))
        .route("/api/events/{id}/close", post(events::close_event))
        .route("/api/events/{id}/assign-manual", post(events::assign_manual))
        .route("/api/events/{id}/replace-skipper", post(events::replace_skipper))
        // Single invitations
        .route("/api/invitations/{id}/confirm", post(invitations::confirm))
        .route("/api/invitations/{id}/respond", post(invitations::respond))
        .route(
            "/api/invitations/{id}/send-reminder",
            post(invitations::send_reminder),
        )
        // Event type configuration
        .route(
            "/api/event-types",
            get(event_types::list).post(event_types::create),
        )
        .route(
            "/api/event-types/{id}",
            put(event_types::update).delete(event_types::delete),
        )
        // Settings
        .route(
            "/api/settings/admin-notifications",
            get(settings::get_admin_notifications).put(settings::update_admin_notifications),
        )
        .route(
            "/api/settings/reminders",
            get(settings::get_reminders).put(settings::update_reminders),
        )
        // Notifications
        .route(
            "/api/notifications",
            get(notifications::list),
        )
        .route("/api/notifications/mark-read", post(notifications::mark_read))
        .route("/api/notifications/stream", get(notifications::stream))
        .with_state(app_state)
        .fallback(handler_404);

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid number");
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::debug!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
