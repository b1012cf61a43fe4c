use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::core::event::AttendanceEvent;
use crate::modules::attendance::core::evolve::state_from_last_event;
use crate::modules::attendance::core::window::ResolvedWindow;
use crate::modules::attendance::use_cases::clock_attendance::decision::{
    AcceptedDecision, Annotation, RejectionReason,
};
use chrono::{DateTime, Duration, Utc};

/// Same-type repeats closer together than this are treated as accidental double taps.
pub const DUPLICATE_GRACE_SECONDS: i64 = 60;
/// Clock-ins later than this after the scheduled start are flagged late.
pub const LATE_ARRIVAL_GRACE_MINUTES: i64 = 5;

/// Decides the inferred action for the next scan: clock-out after a clock-in, clock-in otherwise.
pub fn decide(
    window: &ResolvedWindow,
    last_event: Option<&AttendanceEvent>,
    now: DateTime<Utc>,
    staff_id: StaffId,
    terminal_origin: &str,
) -> Result<AcceptedDecision, RejectionReason> {
    let requested = state_from_last_event(last_event).next_action();
    decide_action(window, last_event, requested, now, staff_id, terminal_origin)
}

/// Decides an explicitly requested action against the last recorded event.
pub fn decide_action(
    window: &ResolvedWindow,
    last_event: Option<&AttendanceEvent>,
    requested: ClockAction,
    now: DateTime<Utc>,
    staff_id: StaffId,
    terminal_origin: &str,
) -> Result<AcceptedDecision, RejectionReason> {
    let state = state_from_last_event(last_event);

    let repeated = state
        .last_action()
        .filter(|(last_action, _)| *last_action == requested);
    if let Some((_, last_at)) = repeated {
        if now - last_at < Duration::seconds(DUPLICATE_GRACE_SECONDS) {
            return Err(RejectionReason::DuplicateWithinGracePeriod { action: requested });
        }
        return Err(RejectionReason::OutOfSequence { action: requested });
    }
    // A clock-out with no clock-in before it.
    if requested != state.next_action() {
        return Err(RejectionReason::OutOfSequence { action: requested });
    }

    let (annotation, scheduled) = match requested {
        ClockAction::ClockIn => {
            if now < window.allowed_in_start {
                return Err(RejectionReason::TooEarly {
                    allowed_from: window.allowed_in_start,
                });
            }
            let late =
                now > window.scheduled_start + Duration::minutes(LATE_ARRIVAL_GRACE_MINUTES);
            (late.then_some(Annotation::LateArrival), window.scheduled_start)
        }
        ClockAction::ClockOut => {
            if now > window.allowed_out_end {
                return Err(RejectionReason::TooLate {
                    allowed_until: window.allowed_out_end,
                });
            }
            let early = now < window.scheduled_end;
            (early.then_some(Annotation::EarlyDeparture), window.scheduled_end)
        }
    };

    let label = requested.label();
    let suffix = annotation
        .map(|a| format!(" **{}** (Scheduled: {})", a.headline(), scheduled.format("%H:%M")))
        .unwrap_or_default();

    Ok(AcceptedDecision {
        event: AttendanceEvent {
            staff_id,
            action: requested,
            occurred_at: now,
            label: label.to_string(),
            note: format!("{label} via QR Terminal. Terminal ID: {terminal_origin}{suffix}"),
            terminal_origin: terminal_origin.to_string(),
        },
        annotation,
    })
}
