//! In-memory entity store. Every workflow operation takes the write guard
//! once for its whole check-then-act, so concurrent staff actions on the
//! same event are serialized: two people racing to confirm the last open
//! slot cannot both pass the quota check.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    errors::{AppError, Resource},
    models::{
        AdminSettings, Boat, Event, EventTypeConfig, NotificationItem, ReminderSettings, Skipper,
    },
};

pub struct Store {
    inner: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            inner: RwLock::new(Tables::default()),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().await
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Tables {
    next_id: i64,
    pub boats: BTreeMap<i64, Boat>,
    pub skippers: BTreeMap<i64, Skipper>,
    pub events: BTreeMap<i64, Event>,
    pub event_types: BTreeMap<i64, EventTypeConfig>,
    pub notifications: Vec<NotificationItem>,
    pub admin_settings: AdminSettings,
    pub reminder_settings: ReminderSettings,
}

impl Default for Tables {
    fn default() -> Self {
        Tables {
            next_id: 1,
            boats: BTreeMap::new(),
            skippers: BTreeMap::new(),
            events: BTreeMap::new(),
            event_types: BTreeMap::new(),
            notifications: Vec::new(),
            admin_settings: AdminSettings::default(),
            reminder_settings: ReminderSettings::default(),
        }
    }
}

impl Tables {
    pub fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn boat(&self, id: i64) -> Result<&Boat, AppError> {
        self.boats
            .get(&id)
            .ok_or(AppError::ResourceNotFound(Resource::Boat))
    }

    pub fn boat_mut(&mut self, id: i64) -> Result<&mut Boat, AppError> {
        self.boats
            .get_mut(&id)
            .ok_or(AppError::ResourceNotFound(Resource::Boat))
    }

    pub fn skipper(&self, id: i64) -> Result<&Skipper, AppError> {
        self.skippers
            .get(&id)
            .ok_or(AppError::ResourceNotFound(Resource::Skipper))
    }

    pub fn skipper_mut(&mut self, id: i64) -> Result<&mut Skipper, AppError> {
        self.skippers
            .get_mut(&id)
            .ok_or(AppError::ResourceNotFound(Resource::Skipper))
    }

    pub fn event(&self, id: i64) -> Result<&Event, AppError> {
        self.events
            .get(&id)
            .ok_or(AppError::ResourceNotFound(Resource::Event))
    }

    pub fn event_mut(&mut self, id: i64) -> Result<&mut Event, AppError> {
        self.events
            .get_mut(&id)
            .ok_or(AppError::ResourceNotFound(Resource::Event))
    }

    pub fn event_by_invitation_mut(&mut self, invitation_id: i64) -> Result<&mut Event, AppError> {
        self.events
            .values_mut()
            .find(|ev| ev.invitation(invitation_id).is_some())
            .ok_or(AppError::ResourceNotFound(Resource::Invitation))
    }

    pub fn remove_event(&mut self, id: i64) -> Result<Event, AppError> {
        self.events
            .remove(&id)
            .ok_or(AppError::ResourceNotFound(Resource::Event))
    }

    pub fn event_type_mut(&mut self, id: i64) -> Result<&mut EventTypeConfig, AppError> {
        self.event_types
            .get_mut(&id)
            .ok_or(AppError::ResourceNotFound(Resource::EventType))
    }

    /// Appends a bell item; the caller publishes the returned copy on the
    /// live channel after the write guard is released.
    pub fn push_notification(
        &mut self,
        kind: &str,
        message: String,
        event_id: Option<i64>,
        invitation_id: Option<i64>,
        skipper_id: Option<i64>,
        response_status: Option<String>,
    ) -> NotificationItem {
        let item = NotificationItem {
            id: self.next_id(),
            kind: kind.to_string(),
            message,
            event_id,
            invitation_id,
            skipper_id,
            response_status,
            is_read: false,
            created_at: Utc::now(),
        };
        self.notifications.push(item.clone());
        item
    }
}
