use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventTypePayload {
    /// Defaults to a slug of the label when omitted.
    pub code: Option<String>,
    #[validate(length(min = 1))]
    pub label: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEventTypePayload {
    #[validate(length(min = 1))]
    pub label: String,
    pub is_active: bool,
}

/// Empty list marks everything read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkReadPayload(pub Vec<i64>);

fn default_true() -> bool {
    true
}
