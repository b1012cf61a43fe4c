use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::config::StaffId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One clock-in or clock-out as recorded by the HR ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    pub staff_id: StaffId,
    pub action: ClockAction,
    pub occurred_at: DateTime<Utc>,
    pub label: String,
    pub note: String,
    pub terminal_origin: String,
}

/// Identifier the ledger assigns to a recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
