//! Launch settings for the window shell, logger and opening tab.

use thiserror::Error;
use tracing::Level;

use super::version::APP_NAME;
use crate::domain::Tab;

pub const LOG_LEVEL_VAR: &str = "TRUCKING_DASHBOARD_LOG";
pub const WINDOW_SIZE_VAR: &str = "TRUCKING_DASHBOARD_WINDOW";
pub const START_TAB_VAR: &str = "TRUCKING_DASHBOARD_TAB";

#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
    pub log_level: Level,
    pub start_tab: Tab,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            window_title: APP_NAME.to_string(),
            window_width: 1280.0,
            window_height: 860.0,
            log_level: Level::INFO,
            start_tab: Tab::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid log level {0:?} in {}", LOG_LEVEL_VAR)]
    InvalidLogLevel(String),
    #[error("invalid window size {0:?} in {}, expected WIDTHxHEIGHT", WINDOW_SIZE_VAR)]
    InvalidWindowSize(String),
    #[error("unknown tab {0:?} in {}", START_TAB_VAR)]
    UnknownTab(String),
}

impl LaunchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_level = raw
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?;
        }

        if let Some(raw) = lookup(WINDOW_SIZE_VAR).filter(|v| !v.trim().is_empty()) {
            let (width, height) =
                parse_window_size(&raw).ok_or_else(|| ConfigError::InvalidWindowSize(raw.clone()))?;
            config.window_width = width;
            config.window_height = height;
        }

        if let Some(raw) = lookup(START_TAB_VAR).filter(|v| !v.trim().is_empty()) {
            config.start_tab =
                Tab::from_id(raw.trim()).ok_or_else(|| ConfigError::UnknownTab(raw.clone()))?;
        }

        Ok(config)
    }
}

fn parse_window_size(raw: &str) -> Option<(f64, f64)> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let width = w.trim().parse::<f64>().ok().filter(|v| *v >= 320.0)?;
    let height = h.trim().parse::<f64>().ok().filter(|v| *v >= 240.0)?;
    Some((width, height))
}
