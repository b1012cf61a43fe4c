use chrono::{DateTime, Utc};

/// Allowed clock-in/out window for one staff member on one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
    /// `scheduled_start` minus the clock-in window.
    pub allowed_in_start: DateTime<Utc>,
    /// `scheduled_end` plus the clock-out window.
    pub allowed_out_end: DateTime<Utc>,
}
