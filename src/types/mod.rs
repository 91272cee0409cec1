pub mod boat_dtos;
pub mod event_dtos;
pub mod invitation_dtos;
pub mod settings_dtos;
pub mod skipper_dtos;

pub use boat_dtos::{CreateBoatPayload, UpdateBoatPayload};
pub use event_dtos::{
    CancelReport, CloseReport, CreateEventPayload, EmailTally, GroupStatus,
    ManualAssignmentPayload, ManualAssignmentReport, StaffingReport, UpdateEventPayload,
};
pub use invitation_dtos::{
    ConfirmDirectPayload, ConfirmDirectReport, ConfirmReport, DirectAssignment,
    InvitationSendReport, ReminderReport, ReplaceSkipperPayload, ReplaceSkipperReport,
    ResponseAnswer, RespondPayload, SendInvitationsPayload,
};
pub use settings_dtos::{CreateEventTypePayload, MarkReadPayload, UpdateEventTypePayload};
pub use skipper_dtos::{SkipperOpenEvent, SkipperPayload};
