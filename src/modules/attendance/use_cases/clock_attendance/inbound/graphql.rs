use async_graphql::{Context, Enum, ErrorExtensions, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::use_cases::clock_attendance::command::ClockAttendance;
use crate::modules::attendance::use_cases::clock_attendance::decision::Annotation;
use crate::modules::attendance::use_cases::clock_attendance::handler::ClockReceipt;
use crate::modules::attendance::use_cases::clock_attendance::inbound::http::{
    status_for, timestamp_to_utc,
};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlClockAction {
    ClockIn,
    ClockOut,
}

impl From<GqlClockAction> for ClockAction {
    fn from(v: GqlClockAction) -> Self {
        match v {
            GqlClockAction::ClockIn => ClockAction::ClockIn,
            GqlClockAction::ClockOut => ClockAction::ClockOut,
        }
    }
}

impl From<ClockAction> for GqlClockAction {
    fn from(v: ClockAction) -> Self {
        match v {
            ClockAction::ClockIn => GqlClockAction::ClockIn,
            ClockAction::ClockOut => GqlClockAction::ClockOut,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlAnnotation {
    LateArrival,
    EarlyDeparture,
}

impl From<Annotation> for GqlAnnotation {
    fn from(v: Annotation) -> Self {
        match v {
            Annotation::LateArrival => GqlAnnotation::LateArrival,
            Annotation::EarlyDeparture => GqlAnnotation::EarlyDeparture,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlClockReceipt {
    pub event_id: String,
    pub user_id: u64,
    pub action: GqlClockAction,
    pub annotation: Option<GqlAnnotation>,
    pub occurred_at: DateTime<Utc>,
    pub message: String,
}

impl From<ClockReceipt> for GqlClockReceipt {
    fn from(r: ClockReceipt) -> Self {
        Self {
            message: r.message(),
            event_id: r.event_id.0,
            user_id: r.staff_id,
            action: r.action.into(),
            annotation: r.annotation.map(Into::into),
            occurred_at: r.occurred_at,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn clock_attendance(
        &self,
        context: &Context<'_>,
        user_id: u64,
        key: String,
        timestamp: f64,
        action: Option<GqlClockAction>,
    ) -> GqlResult<GqlClockReceipt> {
        let state = context.data_unchecked::<AppState>();

        if !state.config.key_matches(user_id, &key) {
            return Err(async_graphql::Error::new("Invalid user ID or secure key")
                .extend_with(|_, e| e.set("status", 403)));
        }
        let occurred_at = timestamp_to_utc(timestamp)
            .ok_or_else(|| async_graphql::Error::new("Timestamp out of range"))?;

        let command = ClockAttendance {
            staff_id: user_id,
            occurred_at,
            terminal_origin: "graphql".into(),
            requested_action: action.map(Into::into),
        };

        state
            .clock_handler
            .handle(command)
            .await
            .map(Into::into)
            .map_err(|e| {
                let status = i32::from(status_for(&e).as_u16());
                async_graphql::Error::new(e.to_string()).extend_with(|_, ext| ext.set("status", status))
            })
    }
}
