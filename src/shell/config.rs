use crate::modules::attendance::core::config::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_ATTENDANCE_CONFIG_PATH: &str = "config/attendance.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerConfig {
    InMemory,
    Dolibarr { base_url: String, api_key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub attendance_config_path: PathBuf,
    pub ledger: LedgerConfig,
    pub trust_forwarded_for: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: "BIND_ADDR".into(),
            value: raw_addr.clone(),
        })?;

        let attendance_config_path = lookup("ATTENDANCE_CONFIG_PATH")
            .unwrap_or_else(|| DEFAULT_ATTENDANCE_CONFIG_PATH.to_string())
            .into();

        let required = |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.into()));
        let ledger = match lookup("LEDGER").as_deref().unwrap_or("memory") {
            "memory" => LedgerConfig::InMemory,
            "dolibarr" => LedgerConfig::Dolibarr {
                base_url: required("DOLIBARR_URL")?,
                api_key: required("DOLIBARR_API_KEY")?,
            },
            other => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "LEDGER".into(),
                    value: other.into(),
                });
            }
        };

        let trust_forwarded_for = match lookup("TRUST_FORWARDED_FOR").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "TRUST_FORWARDED_FOR".into(),
                    value: other.into(),
                });
            }
        };

        Ok(Self {
            bind_addr,
            attendance_config_path,
            ledger,
            trust_forwarded_for,
        })
    }
}
