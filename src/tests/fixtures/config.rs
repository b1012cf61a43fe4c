// Shared attendance configuration for tests.
//
// 2024-01-01 is a Monday, so the day constants below map onto known weekdays.

use crate::modules::attendance::core::config::{AttendanceConfig, DaySchedule, WeekdayCode};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

pub const MONDAY: (i32, u32, u32) = (2024, 1, 1);
pub const TUESDAY: (i32, u32, u32) = (2024, 1, 2);
pub const WEDNESDAY: (i32, u32, u32) = (2024, 1, 3);
pub const SATURDAY: (i32, u32, u32) = (2024, 1, 6);

pub fn at((year, month, day): (i32, u32, u32), hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid fixture date")
        .and_utc()
}

fn week(days: &[WeekdayCode], schedule: DaySchedule) -> HashMap<WeekdayCode, DaySchedule> {
    days.iter().map(|day| (*day, schedule.clone())).collect()
}

/// FULL_TIME_A covers the whole of every weekday, PART_TIME_B Monday and Wednesday mornings,
/// OFFICE regular office hours. CONTRACTORS is assigned but has no schedule.
pub fn make_attendance_config() -> AttendanceConfig {
    use WeekdayCode::*;

    let staff_groups = [
        (5, "FULL_TIME_A"),
        (7, "FULL_TIME_A"),
        (8, "FULL_TIME_A"),
        (103, "FULL_TIME_A"),
        (102, "PART_TIME_B"),
        (200, "OFFICE"),
        (300, "CONTRACTORS"),
    ]
    .into_iter()
    .map(|(id, group)| (id, group.to_string()))
    .collect();

    let group_schedules = HashMap::from([
        (
            "FULL_TIME_A".to_string(),
            week(&[Mon, Tue, Wed, Thu, Fri], DaySchedule::new("00:00", "23:59", 15, 30)),
        ),
        (
            "PART_TIME_B".to_string(),
            week(&[Mon, Wed], DaySchedule::new("10:00", "14:00", 10, 10)),
        ),
        (
            "OFFICE".to_string(),
            week(&[Mon, Tue, Wed, Thu, Fri], DaySchedule::new("09:00", "17:00", 15, 30)),
        ),
    ]);

    let staff_keys = [
        (5, "1462b9a6a849086c"),
        (7, "051fcb313dadf30d"),
        (8, "051fcb313dadf30d"),
        (102, "part-time-0102"),
        (200, "office-key-0200"),
        (300, "contractor-0300"),
    ]
    .into_iter()
    .map(|(id, key)| (id, key.to_string()))
    .collect();

    AttendanceConfig {
        staff_groups,
        group_schedules,
        staff_keys,
    }
}
