use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::core::event::AttendanceEvent;
use crate::tests::fixtures::config::{MONDAY, at};
use chrono::{DateTime, Utc};

pub struct AttendanceEventBuilder {
    inner: AttendanceEvent,
}

impl AttendanceEventBuilder {
    /// An office clock-in at 09:00 on Monday.
    pub fn new() -> Self {
        Self {
            inner: AttendanceEvent {
                staff_id: 200,
                action: ClockAction::ClockIn,
                occurred_at: at(MONDAY, 9, 0),
                label: "Clock-in".to_string(),
                note: "Clock-in via QR Terminal. Terminal ID: 10.0.0.17".to_string(),
                terminal_origin: "10.0.0.17".to_string(),
            },
        }
    }

    pub fn staff_id(mut self, v: StaffId) -> Self {
        self.inner.staff_id = v;
        self
    }

    pub fn action(mut self, v: ClockAction) -> Self {
        self.inner.action = v;
        self.inner.label = v.label().to_string();
        self.inner.note = format!(
            "{} via QR Terminal. Terminal ID: {}",
            v.label(),
            self.inner.terminal_origin
        );
        self
    }

    pub fn occurred_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.occurred_at = v;
        self
    }

    pub fn build(self) -> AttendanceEvent {
        self.inner
    }
}
