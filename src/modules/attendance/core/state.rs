use crate::modules::attendance::core::action::ClockAction;
use chrono::{DateTime, Utc};

/// What the last recorded event says about a staff member.
///
/// Only the most recent event matters, so there are exactly two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// Never clocked, or the last event was a clock-out.
    Idle {
        last_clock_out: Option<DateTime<Utc>>,
    },
    /// The last event was a clock-in.
    ClockedIn { since: DateTime<Utc> },
}

impl Default for ClockState {
    fn default() -> Self {
        ClockState::Idle {
            last_clock_out: None,
        }
    }
}

impl ClockState {
    /// The action a terminal without explicit buttons is asking for.
    pub fn next_action(&self) -> ClockAction {
        match self {
            ClockState::ClockedIn { .. } => ClockAction::ClockOut,
            ClockState::Idle { .. } => ClockAction::ClockIn,
        }
    }

    /// The last recorded action and when it happened, if any.
    pub fn last_action(&self) -> Option<(ClockAction, DateTime<Utc>)> {
        match *self {
            ClockState::ClockedIn { since } => Some((ClockAction::ClockIn, since)),
            ClockState::Idle {
                last_clock_out: Some(at),
            } => Some((ClockAction::ClockOut, at)),
            ClockState::Idle {
                last_clock_out: None,
            } => None,
        }
    }
}
