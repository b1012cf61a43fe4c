use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

use staff_attendance::modules::attendance::core::config::AttendanceConfig;
use staff_attendance::shared::infrastructure::attendance_ledger::AttendanceLedger;
use staff_attendance::shared::infrastructure::attendance_ledger::dolibarr::DolibarrLedger;
use staff_attendance::shared::infrastructure::attendance_ledger::in_memory::InMemoryAttendanceLedger;
use staff_attendance::shell::config::{AppConfig, LedgerConfig};
use staff_attendance::shell::http::router;
use staff_attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let app_config = AppConfig::from_env()?;
    let attendance = AttendanceConfig::load(&app_config.attendance_config_path)?;
    for (group, weekday, reason) in attendance.malformed_entries() {
        tracing::warn!(%group, %weekday, %reason, config_defect = true, "malformed schedule entry");
    }
    tracing::info!(
        staff = attendance.staff_groups.len(),
        groups = attendance.group_schedules.len(),
        path = %app_config.attendance_config_path.display(),
        "attendance configuration loaded"
    );

    let ledger: Arc<dyn AttendanceLedger> = match &app_config.ledger {
        LedgerConfig::InMemory => {
            tracing::warn!("using the in-memory ledger; clock events are not persisted");
            Arc::new(InMemoryAttendanceLedger::new())
        }
        LedgerConfig::Dolibarr { base_url, api_key } => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()?;
            Arc::new(DolibarrLedger::new(client, base_url.clone(), api_key.clone()))
        }
    };

    let state = AppState::with_ledger(Arc::new(attendance), ledger)
        .trusting_forwarded_for(app_config.trust_forwarded_for);
    let app = router(state);

    tracing::info!("Clock endpoint: http://{}/clock", app_config.bind_addr);
    let listener = tokio::net::TcpListener::bind(app_config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
