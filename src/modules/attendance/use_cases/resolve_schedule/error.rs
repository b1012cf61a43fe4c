use crate::modules::attendance::core::config::{StaffId, WeekdayCode};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("User {staff_id} is not assigned to a staff group.")]
    UnassignedStaff { staff_id: StaffId },

    #[error("Staff group '{group}' has no defined schedule.")]
    GroupHasNoSchedule { group: String },

    #[error("User {staff_id} (Group: {group}) is not scheduled to work on {weekday}.")]
    NotScheduledToday {
        staff_id: StaffId,
        group: String,
        weekday: WeekdayCode,
    },

    #[error("Error parsing schedule times for group '{group}' on {weekday}: {reason}")]
    MalformedSchedule {
        group: String,
        weekday: WeekdayCode,
        reason: String,
    },
}

impl ScheduleError {
    /// Operator configuration defects, as opposed to expected per-user outcomes.
    pub fn is_config_defect(&self) -> bool {
        matches!(self, ScheduleError::MalformedSchedule { .. })
    }
}
