use crate::modules::attendance::core::config::{AttendanceConfig, StaffId, WeekdayCode};
use crate::modules::attendance::core::window::ResolvedWindow;
use crate::modules::attendance::use_cases::resolve_schedule::error::ScheduleError;
use chrono::{DateTime, Datelike, Duration, Utc};
use std::sync::Arc;

/// Resolves the allowed window for a staff member on the calendar day of `now` (UTC).
#[derive(Debug, Clone)]
pub struct ScheduleResolver {
    config: Arc<AttendanceConfig>,
}

impl ScheduleResolver {
    pub fn new(config: Arc<AttendanceConfig>) -> Self {
        Self { config }
    }

    pub fn resolve(
        &self,
        staff_id: StaffId,
        now: DateTime<Utc>,
    ) -> Result<ResolvedWindow, ScheduleError> {
        let weekday = WeekdayCode::from(now.weekday());

        let group = self
            .config
            .group_of(staff_id)
            .ok_or(ScheduleError::UnassignedStaff { staff_id })?;

        let week = self
            .config
            .schedule_of(group)
            .ok_or_else(|| ScheduleError::GroupHasNoSchedule {
                group: group.to_string(),
            })?;

        let day = week
            .get(&weekday)
            .ok_or_else(|| ScheduleError::NotScheduledToday {
                staff_id,
                group: group.to_string(),
                weekday,
            })?;

        let (start, end) = day
            .parse_times()
            .map_err(|reason| ScheduleError::MalformedSchedule {
                group: group.to_string(),
                weekday,
                reason,
            })?;

        let date = now.date_naive();
        let scheduled_start = date.and_time(start).and_utc();
        let scheduled_end = date.and_time(end).and_utc();

        Ok(ResolvedWindow {
            scheduled_start,
            scheduled_end,
            allowed_in_start: scheduled_start - Duration::minutes(i64::from(day.clock_in_window)),
            allowed_out_end: scheduled_end + Duration::minutes(i64::from(day.clock_out_window)),
        })
    }
}

#[cfg(test)]
mod schedule_resolver_tests {
    use super::*;
    use crate::modules::attendance::core::config::DaySchedule;
    use crate::tests::fixtures::config::{
        MONDAY, SATURDAY, TUESDAY, at, make_attendance_config,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn resolver() -> ScheduleResolver {
        ScheduleResolver::new(Arc::new(make_attendance_config()))
    }

    #[rstest]
    fn it_should_resolve_the_window_anchored_to_the_event_date(resolver: ScheduleResolver) {
        let window = resolver.resolve(200, at(MONDAY, 8, 44)).unwrap();
        assert_eq!(window.scheduled_start, at(MONDAY, 9, 0));
        assert_eq!(window.scheduled_end, at(MONDAY, 17, 0));
        assert_eq!(window.allowed_in_start, at(MONDAY, 8, 45));
        assert_eq!(window.allowed_out_end, at(MONDAY, 17, 30));
    }

    #[rstest]
    fn it_should_cover_the_whole_day_for_full_time_groups(resolver: ScheduleResolver) {
        let window = resolver.resolve(5, at(TUESDAY, 3, 0)).unwrap();
        assert_eq!(window.scheduled_start, at(TUESDAY, 0, 0));
        assert_eq!(window.scheduled_end, at(TUESDAY, 23, 59));
        assert_eq!(window.allowed_in_start, at(MONDAY, 23, 45));
    }

    #[rstest]
    #[case(999)]
    #[case(0)]
    fn it_should_reject_unassigned_staff(resolver: ScheduleResolver, #[case] staff_id: StaffId) {
        assert_eq!(
            resolver.resolve(staff_id, at(MONDAY, 9, 0)),
            Err(ScheduleError::UnassignedStaff { staff_id })
        );
    }

    #[rstest]
    fn it_should_reject_groups_without_a_schedule(resolver: ScheduleResolver) {
        assert_eq!(
            resolver.resolve(300, at(MONDAY, 9, 0)),
            Err(ScheduleError::GroupHasNoSchedule {
                group: "CONTRACTORS".into()
            })
        );
    }

    #[rstest]
    #[case(102, TUESDAY, "PART_TIME_B", WeekdayCode::Tue)]
    #[case(5, SATURDAY, "FULL_TIME_A", WeekdayCode::Sat)]
    fn it_should_report_days_without_a_schedule(
        resolver: ScheduleResolver,
        #[case] staff_id: StaffId,
        #[case] day: (i32, u32, u32),
        #[case] group: &str,
        #[case] weekday: WeekdayCode,
    ) {
        let result = resolver.resolve(staff_id, at(day, 11, 0));
        assert_eq!(
            result,
            Err(ScheduleError::NotScheduledToday {
                staff_id,
                group: group.into(),
                weekday,
            })
        );
        assert!(!result.unwrap_err().is_config_defect());
    }

    #[rstest]
    fn it_should_surface_malformed_times_as_a_config_defect() {
        let mut config = make_attendance_config();
        config
            .group_schedules
            .get_mut("PART_TIME_B")
            .unwrap()
            .insert(WeekdayCode::Mon, DaySchedule::new("1O:00", "14:00", 10, 10));
        let resolver = ScheduleResolver::new(Arc::new(config));
        let err = resolver.resolve(102, at(MONDAY, 10, 0)).unwrap_err();
        assert!(matches!(
            &err,
            ScheduleError::MalformedSchedule { group, weekday: WeekdayCode::Mon, .. } if group == "PART_TIME_B"
        ));
        assert!(err.is_config_defect());
    }

    #[rstest]
    fn it_should_be_idempotent_for_identical_inputs(resolver: ScheduleResolver) {
        let now = at(MONDAY, 12, 30);
        assert_eq!(resolver.resolve(102, now), resolver.resolve(102, now));
    }
}
