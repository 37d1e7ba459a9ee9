//! Demo configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where trace lines go, if anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TraceMode {
    /// Tracing disabled.
    #[default]
    Off,
    /// Plain indented lines on stdout.
    Stdout,
    /// `DEBUG` events through the logging pipeline.
    Log,
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub trace: TraceMode,
    pub ticks: u32,
    pub tick_interval: Duration,
    pub player_visible: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            trace: TraceMode::Off,
            ticks: 1,
            tick_interval: Duration::from_millis(250),
            player_visible: false,
            log_dir: None,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_TRACE` - `off`, `stdout` or `log` (default: off)
    /// - `BT_TICKS` - Number of ticks of the main tree (default: 1)
    /// - `BT_TICK_INTERVAL_MS` - Delay between ticks (default: 250)
    /// - `BT_PLAYER_VISIBLE` - Whether the player starts out visible (default: false)
    /// - `BT_LOG_DIR` - Also write logs to `<dir>/detect-and-shoot.log` (default: unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = env::var("BT_TRACE") {
            config.trace = parse_trace_mode(&value)?;
        }
        if let Some(ticks) = read_env::<u32>("BT_TICKS") {
            config.ticks = ticks.max(1);
        }
        if let Some(ms) = read_env::<u64>("BT_TICK_INTERVAL_MS") {
            config.tick_interval = Duration::from_millis(ms);
        }
        if let Some(visible) = read_env_bool("BT_PLAYER_VISIBLE") {
            config.player_visible = visible;
        }
        if let Some(dir) = env::var_os("BT_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }
}

fn parse_trace_mode(value: &str) -> Result<TraceMode, ConfigError> {
    TraceMode::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
        key: "BT_TRACE",
        value: value.to_owned(),
    })
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
