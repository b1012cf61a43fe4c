use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::config::StaffId;
use chrono::{DateTime, Utc};

/// A terminal scan, already authenticated, asking to record attendance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockAttendance {
    pub staff_id: StaffId,
    pub occurred_at: DateTime<Utc>,
    pub terminal_origin: String,
    /// Set by terminals with separate IN/OUT buttons; inferred from the ledger otherwise.
    pub requested_action: Option<ClockAction>,
}
