// Static attendance configuration: group assignment, weekly schedules and staff keys.
//
// Loaded once at startup and shared immutably. Schedule times stay as the operator wrote them and
// are parsed during resolution, so one bad entry only affects the group and day it belongs to.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub type StaffId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeekdayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl From<Weekday> for WeekdayCode {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => WeekdayCode::Mon,
            Weekday::Tue => WeekdayCode::Tue,
            Weekday::Wed => WeekdayCode::Wed,
            Weekday::Thu => WeekdayCode::Thu,
            Weekday::Fri => WeekdayCode::Fri,
            Weekday::Sat => WeekdayCode::Sat,
            Weekday::Sun => WeekdayCode::Sun,
        }
    }
}

impl std::fmt::Display for WeekdayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            WeekdayCode::Mon => "MON",
            WeekdayCode::Tue => "TUE",
            WeekdayCode::Wed => "WED",
            WeekdayCode::Thu => "THU",
            WeekdayCode::Fri => "FRI",
            WeekdayCode::Sat => "SAT",
            WeekdayCode::Sun => "SUN",
        };
        f.write_str(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Scheduled start, `HH:MM` in UTC.
    pub start_time: String,
    /// Scheduled end, `HH:MM` in UTC.
    pub end_time: String,
    /// Minutes before the start during which a clock-in is accepted.
    pub clock_in_window: u32,
    /// Minutes after the end during which a clock-out is accepted.
    pub clock_out_window: u32,
}

impl DaySchedule {
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        clock_in_window: u32,
        clock_out_window: u32,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            clock_in_window,
            clock_out_window,
        }
    }

    /// Parses start and end; start must not be after end.
    pub fn parse_times(&self) -> Result<(NaiveTime, NaiveTime), String> {
        let start = parse_hh_mm(&self.start_time)?;
        let end = parse_hh_mm(&self.end_time)?;
        if start > end {
            return Err(format!(
                "start time {} is after end time {}",
                self.start_time, self.end_time
            ));
        }
        Ok((start, end))
    }
}

fn parse_hh_mm(value: &str) -> Result<NaiveTime, String> {
    let well_formed = value.len() == 5 && value.as_bytes()[2] == b':';
    if !well_formed {
        return Err(format!("'{value}' is not a HH:MM time"));
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| format!("'{value}': {e}"))
}

pub type WeeklySchedule = HashMap<WeekdayCode, DaySchedule>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read attendance config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse attendance config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {name}: {value}")]
    InvalidEnvVar { name: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceConfig {
    #[serde(default)]
    pub staff_groups: HashMap<StaffId, String>,
    #[serde(default)]
    pub group_schedules: HashMap<String, WeeklySchedule>,
    #[serde(default)]
    pub staff_keys: HashMap<StaffId, String>,
}

impl AttendanceConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn group_of(&self, staff_id: StaffId) -> Option<&str> {
        self.staff_groups.get(&staff_id).map(String::as_str)
    }

    pub fn schedule_of(&self, group: &str) -> Option<&WeeklySchedule> {
        self.group_schedules.get(group)
    }

    pub fn key_matches(&self, staff_id: StaffId, key: &str) -> bool {
        self.staff_keys
            .get(&staff_id)
            .is_some_and(|expected| expected == key)
    }

    /// Every (group, weekday, reason) whose times would fail to resolve.
    pub fn malformed_entries(&self) -> Vec<(String, WeekdayCode, String)> {
        let mut found: Vec<_> = self
            .group_schedules
            .iter()
            .flat_map(|(group, week)| {
                week.iter().filter_map(move |(day, schedule)| {
                    schedule
                        .parse_times()
                        .err()
                        .map(|reason| (group.clone(), *day, reason))
                })
            })
            .collect();
        found.sort_by(|a, b| (&a.0, a.1 as u8).cmp(&(&b.0, b.1 as u8)));
        found
    }
}
