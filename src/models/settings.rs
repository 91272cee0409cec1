use serde::{Deserialize, Serialize};

/// Configurable event-type codes (regatta, teambuilding, clinic, ...),
/// managed by staff. Deactivated codes stay valid on existing events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeConfig {
    pub id: i64,
    pub code: String,
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    pub admin_email: String,
    pub admin_notifications_enabled: bool,
}

/// Read by an external scheduler that fires the reminder operations; this
/// service only stores and serves the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    pub automatic_reminders_enabled: bool,
    pub reminder_days_before: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        ReminderSettings {
            automatic_reminders_enabled: false,
            reminder_days_before: 3,
        }
    }
}
