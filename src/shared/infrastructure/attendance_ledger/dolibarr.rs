// Dolibarr agenda events as the attendance ledger.
//
// Clock actions are stored as agenda events of type AC_CLOIN / AC_CLOOUT, which must exist in the
// Dolibarr event-type dictionary. Timestamps travel as Unix seconds.

use crate::modules::attendance::core::action::{CLOCK_IN_TYPE, CLOCK_OUT_TYPE, ClockAction};
use crate::modules::attendance::core::config::StaffId;
use crate::modules::attendance::core::event::{AttendanceEvent, EventId};
use crate::shared::infrastructure::attendance_ledger::{AttendanceLedger, LedgerError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tracing::{debug, error};

const API_KEY_HEADER: &str = "DOLAPIKEY";

#[derive(Debug, Clone)]
pub struct DolibarrLedger {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DolibarrLedger {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/agendaevents", self.base_url)
    }
}

/// Query parameters selecting the newest clock event of one user.
pub fn last_event_query(staff_id: StaffId) -> Vec<(&'static str, String)> {
    let sqlfilters = format!(
        "(t.fk_user:=:'{staff_id}') AND ((t.type:=:'{CLOCK_IN_TYPE}') OR (t.type:=:'{CLOCK_OUT_TYPE}'))"
    );
    vec![
        ("sortfield", "t.dateo".to_string()),
        ("sortorder", "DESC".to_string()),
        ("limit", "1".to_string()),
        ("sqlfilters", sqlfilters),
    ]
}

pub fn agenda_payload(event: &AttendanceEvent) -> Value {
    let timestamp = event.occurred_at.timestamp();
    json!({
        "type": event.action.type_code(),
        "dateo": timestamp,
        "datef": timestamp,
        "label": event.label,
        "note": event.note,
        "fk_user": event.staff_id,
        "fullday": 0,
    })
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn terminal_from_note(note: &str) -> String {
    note.split("Terminal ID: ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_default()
        .to_string()
}

/// Decodes the first row of an agenda event listing.
pub fn decode_last_event(staff_id: StaffId, body: &Value) -> Result<Option<AttendanceEvent>, LedgerError> {
    let Some(row) = body.as_array().and_then(|rows| rows.first()) else {
        return Ok(None);
    };

    let code = row
        .get("type_code")
        .or_else(|| row.get("type"))
        .and_then(Value::as_str)
        .ok_or_else(|| LedgerError::Decode("agenda event without a type".into()))?;
    let action = ClockAction::from_type_code(code)
        .ok_or_else(|| LedgerError::Decode(format!("unexpected agenda event type {code}")))?;

    let seconds = row
        .get("dateo")
        .or_else(|| row.get("datep"))
        .and_then(as_i64)
        .ok_or_else(|| LedgerError::Decode("agenda event without a start date".into()))?;
    let occurred_at = DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| LedgerError::Decode(format!("timestamp {seconds} out of range")))?;

    let note = row
        .get("note")
        .or_else(|| row.get("note_private"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Some(AttendanceEvent {
        staff_id,
        action,
        occurred_at,
        label: row
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or(action.label())
            .to_string(),
        terminal_origin: terminal_from_note(&note),
        note,
    }))
}

/// A successful create answers with the bare id of the new agenda event.
pub fn decode_event_id(body: &Value) -> Result<EventId, LedgerError> {
    as_i64(body)
        .map(|id| EventId(id.to_string()))
        .ok_or_else(|| LedgerError::Decode(format!("expected an event id, got {body}")))
}

async fn read_json(response: reqwest::Response) -> Result<Value, LedgerError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(status = status.as_u16(), %body, "Dolibarr request failed");
        return Err(LedgerError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json()
        .await
        .map_err(|e| LedgerError::Decode(e.to_string()))
}

#[async_trait]
impl AttendanceLedger for DolibarrLedger {
    async fn last_event(&self, staff_id: StaffId) -> Result<Option<AttendanceEvent>, LedgerError> {
        let response = self
            .client
            .get(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .query(&last_event_query(staff_id))
            .send()
            .await
            .map_err(|e| LedgerError::Backend(e.to_string()))?;

        // Dolibarr answers an empty listing with 404.
        if response.status() == StatusCode::NOT_FOUND {
            debug!(staff_id, "no clock events recorded yet");
            return Ok(None);
        }
        let body = read_json(response).await?;
        decode_last_event(staff_id, &body)
    }

    async fn record(&self, event: &AttendanceEvent) -> Result<EventId, LedgerError> {
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&agenda_payload(event))
            .send()
            .await
            .map_err(|e| LedgerError::Backend(e.to_string()))?;
        let body = read_json(response).await?;
        decode_event_id(&body)
    }
}
