use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::use_cases::clock_attendance::command::ClockAttendance;
use crate::tests::fixtures::config::{MONDAY, at};
use chrono::{DateTime, Utc};

pub struct ClockAttendanceBuilder {
    inner: ClockAttendance,
}

impl ClockAttendanceBuilder {
    pub fn new() -> Self {
        Self {
            inner: ClockAttendance {
                staff_id: 200,
                occurred_at: at(MONDAY, 9, 0),
                terminal_origin: "10.0.0.17".to_string(),
                requested_action: None,
            },
        }
    }

    pub fn staff_id(mut self, v: StaffId) -> Self {
        self.inner.staff_id = v;
        self
    }

    pub fn occurred_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.occurred_at = v;
        self
    }

    pub fn requested_action(mut self, v: ClockAction) -> Self {
        self.inner.requested_action = Some(v);
        self
    }

    pub fn build(self) -> ClockAttendance {
        self.inner
    }
}
