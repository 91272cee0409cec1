use serde::{Deserialize, Serialize};

/// A freelance crew member. The three capability flags are independent: one
/// person can be bookable as skipper, coach and race director at the same
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skipper {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub half_day_rate: f64,
    pub full_day_rate: f64,
    pub notes: Option<String>,
    pub is_active: bool,
    pub is_skipper: bool,
    pub is_coach: bool,
    pub is_race_director: bool,
}

impl Skipper {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
