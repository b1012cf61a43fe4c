use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::use_cases::clock_attendance::decision::{
    Annotation, RejectionReason,
};
use crate::modules::attendance::use_cases::clock_attendance::handler::ApplicationError;
use crate::modules::attendance::use_cases::resolve_schedule::error::ScheduleError;
use crate::shared::infrastructure::attendance_ledger::AttendanceLedger;
use crate::shared::infrastructure::attendance_ledger::in_memory::InMemoryAttendanceLedger;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::ClockAttendanceBuilder;
use crate::tests::fixtures::config::{MONDAY, WEDNESDAY, at, make_attendance_config};
use chrono::Duration;
use std::sync::Arc;

fn make_state() -> (AppState, Arc<InMemoryAttendanceLedger>) {
    let ledger = Arc::new(InMemoryAttendanceLedger::new());
    let state = AppState::with_ledger(Arc::new(make_attendance_config()), ledger.clone());
    (state, ledger)
}

#[tokio::test]
async fn records_a_full_part_time_shift() {
    let (state, ledger) = make_state();
    let scan = |hour, minute| {
        ClockAttendanceBuilder::new()
            .staff_id(102)
            .occurred_at(at(MONDAY, hour, minute))
            .build()
    };

    let too_early = state.clock_handler.handle(scan(9, 49)).await;
    assert!(matches!(
        too_early,
        Err(ApplicationError::Rejected(RejectionReason::TooEarly { .. }))
    ));

    let clock_in = state.clock_handler.handle(scan(9, 55)).await.unwrap();
    assert_eq!(clock_in.action, ClockAction::ClockIn);
    assert_eq!(clock_in.annotation, None);

    let clock_out = state.clock_handler.handle(scan(14, 5)).await.unwrap();
    assert_eq!(clock_out.action, ClockAction::ClockOut);
    assert_eq!(clock_out.annotation, None);

    let events = ledger.events_of(102).await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, ClockAction::ClockIn);
    assert_eq!(events[1].action, ClockAction::ClockOut);
    assert_eq!(
        ledger.last_event(102).await.unwrap().as_ref(),
        events.last()
    );
}

#[tokio::test]
async fn rejects_a_clock_out_after_the_window_and_keeps_the_staff_member_clocked_in() {
    let (state, ledger) = make_state();
    let scan = |hour, minute| {
        ClockAttendanceBuilder::new()
            .staff_id(102)
            .occurred_at(at(WEDNESDAY, hour, minute))
            .build()
    };

    state.clock_handler.handle(scan(10, 20)).await.unwrap();
    let too_late = state.clock_handler.handle(scan(14, 11)).await;

    assert!(matches!(
        &too_late,
        Err(ApplicationError::Rejected(RejectionReason::TooLate { .. }))
    ));
    assert_eq!(
        too_late.unwrap_err().to_string(),
        "Clock-out too late. Allowed until 14:10."
    );
    let events = ledger.events_of(102).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, ClockAction::ClockIn);
}

#[tokio::test]
async fn allows_stepping_out_and_clocking_in_again() {
    let (state, ledger) = make_state();
    let start = at(MONDAY, 9, 0);
    let scans = [
        start,
        start + Duration::hours(3),
        start + Duration::hours(4),
        start + Duration::hours(8),
    ];

    let mut receipts = Vec::new();
    for when in scans {
        let receipt = state
            .clock_handler
            .handle(ClockAttendanceBuilder::new().occurred_at(when).build())
            .await
            .unwrap();
        receipts.push((receipt.action, receipt.annotation));
    }

    assert_eq!(
        receipts,
        vec![
            (ClockAction::ClockIn, None),
            (ClockAction::ClockOut, Some(Annotation::EarlyDeparture)),
            (ClockAction::ClockIn, Some(Annotation::LateArrival)),
            (ClockAction::ClockOut, None),
        ]
    );
    assert_eq!(ledger.events_of(200).await.len(), 4);
}

#[tokio::test]
async fn rejects_an_explicit_repeat_once_the_grace_period_is_over() {
    let (state, ledger) = make_state();
    let first = ClockAttendanceBuilder::new()
        .staff_id(5)
        .requested_action(ClockAction::ClockIn)
        .build();
    let repeat = ClockAttendanceBuilder::new()
        .staff_id(5)
        .occurred_at(first.occurred_at + Duration::minutes(10))
        .requested_action(ClockAction::ClockIn)
        .build();

    state.clock_handler.handle(first).await.unwrap();
    let result = state.clock_handler.handle(repeat).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Cannot Clock-in. You must Clock-out first."
    );
    assert_eq!(ledger.events_of(5).await.len(), 1);
}

#[tokio::test]
async fn does_not_touch_the_ledger_for_unscheduled_staff() {
    let (state, ledger) = make_state();
    let result = state
        .clock_handler
        .handle(ClockAttendanceBuilder::new().staff_id(300).build())
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Schedule(ScheduleError::GroupHasNoSchedule { .. }))
    ));
    assert!(ledger.events_of(300).await.is_empty());
}
