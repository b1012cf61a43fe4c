use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::core::event::{AttendanceEvent, EventId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("ledger rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected ledger response: {0}")]
    Decode(String),
}

/// The HR system that stores clock events per staff member.
#[async_trait]
pub trait AttendanceLedger: Send + Sync {
    /// Most recent clock-in or clock-out for the staff member, by occurrence time.
    async fn last_event(&self, staff_id: StaffId) -> Result<Option<AttendanceEvent>, LedgerError>;

    async fn record(&self, event: &AttendanceEvent) -> Result<EventId, LedgerError>;
}

pub mod dolibarr;
pub mod in_memory;
