use serde::{Deserialize, Serialize};
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" | "development" => Self::Dev,
            "test" | "testing" => Self::Test,
            "staging" => Self::Staging,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub environment: Environment,
    pub region: Option<String>,
    pub bind_addr: String,
    pub metrics_addr: Option<String>,
    pub log_level: String,
}

impl ServiceConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        let service_name = env_var("KADAL_SERVICE_NAME", default_service_name.to_string());
        let environment = Environment::from_env(&env_var("KADAL_ENV", "local".to_string()));
        let region = env::var("KADAL_REGION").ok();
        let bind_addr = env_var("KADAL_BIND_ADDR", "0.0.0.0:8080".to_string());
        let metrics_addr = env::var("KADAL_METRICS_ADDR").ok();
        let log_level = env_var("KADAL_LOG_LEVEL", "info".to_string());

        Self {
            service_name,
            environment,
            region,
            bind_addr,
            metrics_addr,
            log_level,
        }
    }
}

/// Position-tracking loop settings. The default position is coastal Tamil
/// Nadu, the fallback the client also uses when the device cannot produce
/// a fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub sample_interval_ms: u64,
    pub default_latitude: f64,
    pub default_longitude: f64,
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self {
            sample_interval_ms: env_var_u64("KADAL_TRACKER_INTERVAL_MS", 5_000),
            default_latitude: env_var_f64("KADAL_DEFAULT_LAT", 8.0883),
            default_longitude: env_var_f64("KADAL_DEFAULT_LON", 77.5385),
        }
    }
}

/// Trip-estimate factors applied to route summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfig {
    pub cruise_speed_kmh: f64,
    pub fuel_burn_l_per_km: f64,
}

impl EstimateConfig {
    pub fn from_env() -> Self {
        Self {
            cruise_speed_kmh: env_var_f64("KADAL_CRUISE_SPEED_KMH", 14.0),
            fuel_burn_l_per_km: env_var_f64("KADAL_FUEL_BURN_L_PER_KM", 0.5),
        }
    }
}

fn env_var(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_var_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_var_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(default)
}
