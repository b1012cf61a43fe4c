use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::event::AttendanceEvent;
use crate::modules::attendance::core::state::ClockState;

pub fn evolve(_state: ClockState, event: &AttendanceEvent) -> ClockState {
    match event.action {
        ClockAction::ClockIn => ClockState::ClockedIn {
            since: event.occurred_at,
        },
        ClockAction::ClockOut => ClockState::Idle {
            last_clock_out: Some(event.occurred_at),
        },
    }
}

/// Folds the ledger's most recent event into the current state.
pub fn state_from_last_event(last_event: Option<&AttendanceEvent>) -> ClockState {
    last_event
        .into_iter()
        .fold(ClockState::default(), evolve)
}
