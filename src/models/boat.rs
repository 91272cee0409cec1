use serde::{Deserialize, Serialize};

/// Whether a boat belongs to the fleet or is chartered in for the occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    Intern,
    Extern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub boat_type: String,
    pub intern_extern: Ownership,
    pub is_active: bool,
}
