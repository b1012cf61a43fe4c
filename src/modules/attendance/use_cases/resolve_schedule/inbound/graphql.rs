use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::attendance::core::window::ResolvedWindow;
use crate::modules::attendance::use_cases::clock_attendance::inbound::http::timestamp_to_utc;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlResolvedWindow {
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
    pub allowed_in_start: DateTime<Utc>,
    pub allowed_out_end: DateTime<Utc>,
}

impl From<ResolvedWindow> for GqlResolvedWindow {
    fn from(w: ResolvedWindow) -> Self {
        Self {
            scheduled_start: w.scheduled_start,
            scheduled_end: w.scheduled_end,
            allowed_in_start: w.allowed_in_start,
            allowed_out_end: w.allowed_out_end,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The window a scan at `timestamp` (Unix seconds) would be checked against.
    async fn resolved_schedule(
        &self,
        context: &Context<'_>,
        user_id: u64,
        timestamp: f64,
    ) -> GqlResult<GqlResolvedWindow> {
        let state = context.data_unchecked::<AppState>();
        let now = timestamp_to_utc(timestamp)
            .ok_or_else(|| async_graphql::Error::new("Timestamp out of range"))?;
        let window = state
            .clock_handler
            .resolver()
            .resolve(user_id, now)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(window.into())
    }
}
