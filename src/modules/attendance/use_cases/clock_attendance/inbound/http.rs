use axum::{
    Json,
    extract::{ConnectInfo, FromRequestParts, State, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::modules::attendance::core::action::ClockAction;
use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::use_cases::clock_attendance::command::ClockAttendance;
use crate::modules::attendance::use_cases::clock_attendance::decision::{Annotation, RejectionReason};
use crate::modules::attendance::use_cases::clock_attendance::handler::ApplicationError;
use crate::modules::attendance::use_cases::resolve_schedule::error::ScheduleError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ClockBody {
    pub user_id: Option<StaffId>,
    pub key: Option<String>,
    /// Unix seconds as sent by the terminal; fractions are kept.
    pub timestamp: Option<f64>,
    pub action: Option<ClockAction>,
}

#[derive(Serialize)]
pub struct ClockResponse {
    pub success: bool,
    pub action: &'static str,
    pub user_id: StaffId,
    pub event_id: String,
    pub annotation: Option<Annotation>,
    pub message: String,
}

/// Where the scan came from: the peer address, or the forwarding proxy's client address when the
/// service is configured to trust it.
pub struct TerminalOrigin(pub String);

impl FromRequestParts<AppState> for TerminalOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let forwarded = state
            .trust_forwarded_for
            .then(|| parts.headers.get("x-forwarded-for"))
            .flatten()
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());
        Ok(TerminalOrigin(
            forwarded.or(peer).unwrap_or_else(|| "unknown".into()),
        ))
    }
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn timestamp_to_utc(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0) as u32;
    DateTime::<Utc>::from_timestamp(whole as i64, nanos.min(999_999_999))
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Schedule(ScheduleError::MalformedSchedule { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ApplicationError::Schedule(_) => StatusCode::FORBIDDEN,
        ApplicationError::Rejected(
            RejectionReason::DuplicateWithinGracePeriod { .. } | RejectionReason::OutOfSequence { .. },
        ) => StatusCode::CONFLICT,
        ApplicationError::Rejected(_) => StatusCode::FORBIDDEN,
        ApplicationError::Ledger(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    TerminalOrigin(origin): TerminalOrigin,
    body: Result<Json<ClockBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let (Some(user_id), Some(key), Some(timestamp)) = (body.user_id, body.key, body.timestamp)
    else {
        return error_body(StatusCode::BAD_REQUEST, "Missing user_id, key, or timestamp");
    };

    if !state.config.key_matches(user_id, &key) {
        return error_body(StatusCode::FORBIDDEN, "Invalid user ID or secure key");
    }

    let Some(occurred_at) = timestamp_to_utc(timestamp) else {
        return error_body(StatusCode::BAD_REQUEST, "Timestamp out of range");
    };

    let command = ClockAttendance {
        staff_id: user_id,
        occurred_at,
        terminal_origin: origin,
        requested_action: body.action,
    };

    match state.clock_handler.handle(command).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(ClockResponse {
                success: true,
                action: receipt.action.label(),
                user_id: receipt.staff_id,
                event_id: receipt.event_id.to_string(),
                annotation: receipt.annotation,
                message: receipt.message(),
            }),
        )
            .into_response(),
        Err(ApplicationError::Ledger(e)) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({
                "success": false,
                "error": "Attendance ledger call failed",
                "details": e.to_string(),
            })),
        )
            .into_response(),
        Err(e) => error_body(status_for(&e), e.to_string()),
    }
}
