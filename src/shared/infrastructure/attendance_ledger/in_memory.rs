// In memory implementation of the AttendanceLedger port.
//
// Supports handler tests and local runs without an HR backend.

use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::core::event::{AttendanceEvent, EventId};
use crate::shared::infrastructure::attendance_ledger::{AttendanceLedger, LedgerError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryAttendanceLedger {
    inner: RwLock<HashMap<StaffId, Vec<AttendanceEvent>>>,
    offline: bool,
    delay_append_ms: AtomicU64,
}

impl InMemoryAttendanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_append_ms(&self, delay: u64) {
        self.delay_append_ms.store(delay, Ordering::SeqCst);
    }

    /// Every recorded event for the staff member, in append order.
    pub async fn events_of(&self, staff_id: StaffId) -> Vec<AttendanceEvent> {
        self.inner
            .read()
            .await
            .get(&staff_id)
            .cloned()
            .unwrap_or_default()
    }

    fn ensure_online(&self) -> Result<(), LedgerError> {
        if self.offline {
            return Err(LedgerError::Backend("Attendance ledger offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttendanceLedger for InMemoryAttendanceLedger {
    async fn last_event(&self, staff_id: StaffId) -> Result<Option<AttendanceEvent>, LedgerError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(&staff_id).and_then(|rows| {
            rows.iter()
                .max_by_key(|event| event.occurred_at)
                .cloned()
        }))
    }

    async fn record(&self, event: &AttendanceEvent) -> Result<EventId, LedgerError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }
        let id = EventId(Uuid::now_v7().to_string());
        self.inner
            .write()
            .await
            .entry(event.staff_id)
            .or_default()
            .push(event.clone());
        Ok(id)
    }
}
