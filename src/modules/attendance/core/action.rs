use serde::{Deserialize, Serialize};

/// Ledger type code for a clock-in agenda event.
pub const CLOCK_IN_TYPE: &str = "AC_CLOIN";
/// Ledger type code for a clock-out agenda event.
pub const CLOCK_OUT_TYPE: &str = "AC_CLOOUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockAction {
    #[serde(rename = "AC_CLOIN", alias = "CLOCK_IN", alias = "in")]
    ClockIn,
    #[serde(rename = "AC_CLOOUT", alias = "CLOCK_OUT", alias = "out")]
    ClockOut,
}

impl ClockAction {
    pub fn label(self) -> &'static str {
        match self {
            ClockAction::ClockIn => "Clock-in",
            ClockAction::ClockOut => "Clock-out",
        }
    }

    pub fn type_code(self) -> &'static str {
        match self {
            ClockAction::ClockIn => CLOCK_IN_TYPE,
            ClockAction::ClockOut => CLOCK_OUT_TYPE,
        }
    }

    pub fn from_type_code(code: &str) -> Option<Self> {
        match code {
            CLOCK_IN_TYPE => Some(ClockAction::ClockIn),
            CLOCK_OUT_TYPE => Some(ClockAction::ClockOut),
            _ => None,
        }
    }

    /// The action that has to be recorded before this one may be repeated.
    pub fn opposite(self) -> Self {
        match self {
            ClockAction::ClockIn => ClockAction::ClockOut,
            ClockAction::ClockOut => ClockAction::ClockIn,
        }
    }
}

impl std::fmt::Display for ClockAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
