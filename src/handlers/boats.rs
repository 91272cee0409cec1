use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    errors::AppError,
    extractors::ValidatedJson,
    models::Boat,
    state::AppState,
    types::{CreateBoatPayload, UpdateBoatPayload},
};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Boat>> {
    let tables = state.store.read().await;
    Json(tables.boats.values().cloned().collect())
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBoatPayload>,
) -> Result<Json<Boat>, AppError> {
    let mut tables = state.store.write().await;
    let id = tables.next_id();
    let boat = Boat {
        id,
        name: payload.name,
        capacity: payload.capacity,
        boat_type: payload.boat_type,
        intern_extern: payload.intern_extern,
        is_active: payload.is_active,
    };
    tables.boats.insert(id, boat.clone());
    Ok(Json(boat))
}

pub async fn update(
    State(state): State<AppState>,
    Path(boat_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateBoatPayload>,
) -> Result<Json<Boat>, AppError> {
    let mut tables = state.store.write().await;
    let boat = tables.boat_mut(boat_id)?;
    if let Some(name) = payload.name {
        boat.name = name;
    }
    if let Some(capacity) = payload.capacity {
        boat.capacity = capacity;
    }
    if let Some(boat_type) = payload.boat_type {
        boat.boat_type = boat_type;
    }
    if let Some(intern_extern) = payload.intern_extern {
        boat.intern_extern = intern_extern;
    }
    if let Some(is_active) = payload.is_active {
        boat.is_active = is_active;
    }
    Ok(Json(boat.clone()))
}

/// Flips availability; deactivation only hides the boat from new event
/// selection.
pub async fn toggle(
    State(state): State<AppState>,
    Path(boat_id): Path<i64>,
) -> Result<Json<Boat>, AppError> {
    let mut tables = state.store.write().await;
    let boat = tables.boat_mut(boat_id)?;
    boat.is_active = !boat.is_active;
    Ok(Json(boat.clone()))
}
