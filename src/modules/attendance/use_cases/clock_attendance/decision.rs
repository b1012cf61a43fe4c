use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::event::AttendanceEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Duplicate clocking attempt. Last {action} was less than 1 minute ago.")]
    DuplicateWithinGracePeriod { action: ClockAction },

    #[error("Cannot {action}. You must {} first.", .action.opposite())]
    OutOfSequence { action: ClockAction },

    #[error("Clock-in too early. Allowed from {}.", .allowed_from.format("%H:%M"))]
    TooEarly { allowed_from: DateTime<Utc> },

    #[error("Clock-out too late. Allowed until {}.", .allowed_until.format("%H:%M"))]
    TooLate { allowed_until: DateTime<Utc> },
}

/// Non-rejecting flag attached to an accepted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Annotation {
    LateArrival,
    EarlyDeparture,
}

impl Annotation {
    pub fn headline(self) -> &'static str {
        match self {
            Annotation::LateArrival => "LATE ARRIVAL",
            Annotation::EarlyDeparture => "EARLY DEPARTURE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedDecision {
    pub event: AttendanceEvent,
    pub annotation: Option<Annotation>,
}
