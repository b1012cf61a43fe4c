use crate::modules::attendance::core::config::AttendanceConfig;
use crate::modules::attendance::use_cases::clock_attendance::handler::ClockAttendanceHandler;
use crate::modules::attendance::use_cases::resolve_schedule::resolve::ScheduleResolver;
use crate::shared::infrastructure::attendance_ledger::AttendanceLedger;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AttendanceConfig>,
    pub clock_handler: Arc<ClockAttendanceHandler<dyn AttendanceLedger>>,
    /// Take the terminal address from `x-forwarded-for`; only safe behind a proxy that sets it.
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(config: AttendanceConfig, ledger: impl AttendanceLedger + 'static) -> Self {
        Self::with_ledger(Arc::new(config), Arc::new(ledger))
    }

    pub fn with_ledger(config: Arc<AttendanceConfig>, ledger: Arc<dyn AttendanceLedger>) -> Self {
        let resolver = Arc::new(ScheduleResolver::new(config.clone()));
        Self {
            config,
            clock_handler: Arc::new(ClockAttendanceHandler::new(resolver, ledger)),
            trust_forwarded_for: false,
        }
    }

    pub fn trusting_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }
}
