use axum::{Json, extract::State};

use crate::{
    models::{AdminSettings, ReminderSettings},
    state::AppState,
};

pub async fn get_admin_notifications(State(state): State<AppState>) -> Json<AdminSettings> {
    let tables = state.store.read().await;
    Json(tables.admin_settings.clone())
}

pub async fn update_admin_notifications(
    State(state): State<AppState>,
    Json(settings): Json<AdminSettings>,
) -> Json<AdminSettings> {
    let mut tables = state.store.write().await;
    tables.admin_settings = settings;
    Json(tables.admin_settings.clone())
}

pub async fn get_reminders(State(state): State<AppState>) -> Json<ReminderSettings> {
    let tables = state.store.read().await;
    Json(tables.reminder_settings.clone())
}

/// Stored for the external reminder scheduler; this service never fires
/// reminders on its own.
pub async fn update_reminders(
    State(state): State<AppState>,
    Json(settings): Json<ReminderSettings>,
) -> Json<ReminderSettings> {
    let mut tables = state.store.write().await;
    tables.reminder_settings = settings;
    Json(tables.reminder_settings.clone())
}
