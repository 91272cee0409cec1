use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    errors::{AppError, Resource},
    extractors::ValidatedJson,
    models::EventTypeConfig,
    state::AppState,
    types::{CreateEventTypePayload, UpdateEventTypePayload},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<EventTypeConfig>> {
    let tables = state.store.read().await;
    Json(
        tables
            .event_types
            .values()
            .filter(|et| query.include_inactive || et.is_active)
            .cloned()
            .collect(),
    )
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEventTypePayload>,
) -> Result<Json<EventTypeConfig>, AppError> {
    let mut tables = state.store.write().await;
    let code = payload.code.unwrap_or_else(|| slugify(&payload.label));
    if tables.event_types.values().any(|et| et.code == code) {
        return Err(AppError::Validation(format!(
            "event type code '{code}' already exists"
        )));
    }
    let id = tables.next_id();
    let event_type = EventTypeConfig {
        id,
        code,
        label: payload.label,
        is_active: payload.is_active,
    };
    tables.event_types.insert(id, event_type.clone());
    Ok(Json(event_type))
}

pub async fn update(
    State(state): State<AppState>,
    Path(event_type_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateEventTypePayload>,
) -> Result<Json<EventTypeConfig>, AppError> {
    let mut tables = state.store.write().await;
    let event_type = tables.event_type_mut(event_type_id)?;
    event_type.label = payload.label;
    event_type.is_active = payload.is_active;
    Ok(Json(event_type.clone()))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(event_type_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let mut tables = state.store.write().await;
    tables
        .event_types
        .remove(&event_type_id)
        .ok_or(AppError::ResourceNotFound(Resource::EventType))?;
    Ok(Json(json!({ "deleted": true })))
}

fn slugify(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
