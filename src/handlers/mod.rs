pub mod boats;
pub mod event_types;
pub mod events;
pub mod invitations;
pub mod notifications;
pub mod settings;
pub mod skippers;
