use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::core::event::EventId;
use crate::modules::attendance::use_cases::clock_attendance::command::ClockAttendance;
use crate::modules::attendance::use_cases::clock_attendance::decide::{decide, decide_action};
use crate::modules::attendance::use_cases::clock_attendance::decision::{
    Annotation, RejectionReason,
};
use crate::modules::attendance::use_cases::resolve_schedule::error::ScheduleError;
use crate::modules::attendance::use_cases::resolve_schedule::resolve::ScheduleResolver;
use crate::shared::infrastructure::attendance_ledger::{AttendanceLedger, LedgerError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockReceipt {
    pub event_id: EventId,
    pub staff_id: StaffId,
    pub action: ClockAction,
    pub annotation: Option<Annotation>,
    pub occurred_at: DateTime<Utc>,
}

impl ClockReceipt {
    pub fn message(&self) -> String {
        let status = self.annotation.map_or("On Time", Annotation::headline);
        format!("Clock {} recorded. Status: {status}", self.action.label())
    }
}

/// Orchestrates one scan: resolve the window, read the last event, decide, record.
///
/// The read and the append for one staff member run under a per-staff lock, so concurrent scans
/// by the same person are decided one after the other against the true last event.
pub struct ClockAttendanceHandler<TLedger>
where
    TLedger: AttendanceLedger + ?Sized + 'static,
{
    resolver: Arc<ScheduleResolver>,
    ledger: Arc<TLedger>,
    staff_locks: Mutex<HashMap<StaffId, Arc<Mutex<()>>>>,
}

impl<TLedger> ClockAttendanceHandler<TLedger>
where
    TLedger: AttendanceLedger + ?Sized + 'static,
{
    pub fn new(resolver: Arc<ScheduleResolver>, ledger: Arc<TLedger>) -> Self {
        Self {
            resolver,
            ledger,
            staff_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn resolver(&self) -> &ScheduleResolver {
        &self.resolver
    }

    async fn staff_lock(&self, staff_id: StaffId) -> Arc<Mutex<()>> {
        self.staff_locks
            .lock()
            .await
            .entry(staff_id)
            .or_default()
            .clone()
    }

    pub async fn handle(&self, command: ClockAttendance) -> Result<ClockReceipt, ApplicationError> {
        let staff_id = command.staff_id;
        let now = command.occurred_at;

        let window = self.resolver.resolve(staff_id, now).inspect_err(|e| {
            if e.is_config_defect() {
                error!(staff_id, config_defect = true, error = %e, "schedule configuration is malformed");
            } else {
                info!(staff_id, reason = %e, "no schedule window for scan");
            }
        })?;

        let lock = self.staff_lock(staff_id).await;
        let _serialized = lock.lock().await;

        let last_event = self.ledger.last_event(staff_id).await.inspect_err(|e| {
            error!(staff_id, error = %e, "failed to read the last clock event");
        })?;

        let decided = match command.requested_action {
            Some(requested) => decide_action(
                &window,
                last_event.as_ref(),
                requested,
                now,
                staff_id,
                &command.terminal_origin,
            ),
            None => decide(
                &window,
                last_event.as_ref(),
                now,
                staff_id,
                &command.terminal_origin,
            ),
        };
        let accepted = decided.inspect_err(|reason| {
            warn!(staff_id, %reason, "clock scan rejected");
        })?;

        let event_id = self.ledger.record(&accepted.event).await.inspect_err(|e| {
            error!(staff_id, error = %e, "failed to record the clock event");
        })?;

        info!(
            staff_id,
            %event_id,
            action = %accepted.event.action,
            annotation = ?accepted.annotation,
            "clock event recorded"
        );

        Ok(ClockReceipt {
            event_id,
            staff_id,
            action: accepted.event.action,
            annotation: accepted.annotation,
            occurred_at: now,
        })
    }
}
