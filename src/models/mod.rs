pub mod boat;
pub mod event;
pub mod invitation;
pub mod notification;
pub mod settings;
pub mod skipper;

// Re-exports for convenience
pub use boat::{Boat, Ownership};
pub use event::{Event, EventBoat, EventDuration, ResponseStatus, WorkflowPhase};
pub use invitation::{Invitation, InvitationRole, InvitationStatus};
pub use notification::NotificationItem;
pub use settings::{AdminSettings, EventTypeConfig, ReminderSettings};
pub use skipper::Skipper;
