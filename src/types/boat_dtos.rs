use serde::Deserialize;
use validator::Validate;

use crate::models::Ownership;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoatPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[validate(length(min = 1))]
    pub boat_type: String,
    pub intern_extern: Ownership,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBoatPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    #[validate(length(min = 1))]
    pub boat_type: Option<String>,
    pub intern_extern: Option<Ownership>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}
