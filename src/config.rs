use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Job discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Conflict detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: SCHED_AUDITOR__)
            .add_source(
                config::Environment::with_prefix("SCHED_AUDITOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discovery: DiscoveryConfig::default(),
            detection: DetectionConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Configuration for the job discovery scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directories scanned when no explicit files are given
    #[serde(default = "default_scan_paths")]
    pub paths: Vec<PathBuf>,

    /// File extensions considered during a scan
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Assumed duration for jobs extracted without an explicit estimate
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// Materialize known-jobs registry defaults when a scan finds nothing
    #[serde(default = "default_true")]
    pub known_jobs_fallback: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            paths: default_scan_paths(),
            extensions: default_extensions(),
            default_duration_minutes: default_duration_minutes(),
            known_jobs_fallback: true,
        }
    }
}

/// Configuration for the conflict detection pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Number of future occurrences projected per schedule.
    /// A fixed horizon bounds the pairwise comparison; high-frequency
    /// schedules see a proportionally shorter lookahead window.
    #[serde(default = "default_projection_horizon")]
    pub projection_horizon: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            projection_horizon: default_projection_horizon(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

// Default value functions
fn default_scan_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("cron"), PathBuf::from("worker")]
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_duration_minutes() -> u32 {
    30
}

fn default_projection_horizon() -> usize {
    24
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
