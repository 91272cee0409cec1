use std::convert::Infallible;

use axum::{
    Json,
    extract::{Query, State},
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures::Stream;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::broadcast;

use crate::{models::NotificationItem, state::AppState, types::MarkReadPayload};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<NotificationItem>> {
    let tables = state.store.read().await;
    let limit = query.limit.unwrap_or(50);
    let items: Vec<NotificationItem> = tables
        .notifications
        .iter()
        .rev()
        .take(limit)
        .cloned()
        .collect();
    Json(items)
}

pub async fn mark_read(
    State(state): State<AppState>,
    Json(payload): Json<MarkReadPayload>,
) -> Json<Value> {
    let mut tables = state.store.write().await;
    let mut updated = 0;
    for item in tables.notifications.iter_mut() {
        if !item.is_read && (payload.0.is_empty() || payload.0.contains(&item.id)) {
            item.is_read = true;
            updated += 1;
        }
    }
    Json(json!({ "updated": updated }))
}

/// Live fan-out of workflow notifications. Consumers that lag are skipped
/// ahead; the bell feed in the store remains the record of truth.
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let receiver = state.notifier.subscribe();
    let stream = futures::stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(item) => match SseEvent::default().json_data(&item) {
                    Ok(event) => return Some((Ok(event), receiver)),
                    Err(e) => {
                        tracing::warn!("failed to serialize notification: {e}");
                        continue;
                    }
                },
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
