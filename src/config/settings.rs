//! User settings for the budget tracker
//!
//! Display and behavior preferences: currency symbol, status thresholds,
//! notification lifetime, TUI tick rate and the default log filter.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::ledger::Thresholds;

/// User settings for the budget tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How long a notification stays visible
    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,

    /// Remaining percentage at or below which the budget is "running low"
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Remaining percentage at or below which the budget is critical
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,

    /// TUI tick interval, also the notification expiry granularity
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default tracing filter when `BUDGET_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_notification_duration_ms() -> u64 {
    3_500
}

fn default_warning_threshold() -> f64 {
    50.0
}

fn default_critical_threshold() -> f64 {
    25.0
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            notification_duration_ms: default_notification_duration_ms(),
            warning_threshold: default_warning_threshold(),
            critical_threshold: default_critical_threshold(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            warning: self.warning_threshold,
            critical: self.critical_threshold,
        }
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Check that the values make sense together
    pub fn validate(&self) -> Result<(), TrackerError> {
        let (warning, critical) = (self.warning_threshold, self.critical_threshold);
        if !(0.0..=100.0).contains(&critical) || !(0.0..=100.0).contains(&warning) {
            return Err(TrackerError::Config(
                "Thresholds must be between 0 and 100".into(),
            ));
        }
        if critical > warning {
            return Err(TrackerError::Config(format!(
                "Critical threshold ({}) cannot exceed warning threshold ({})",
                critical, warning
            )));
        }
        if self.notification_duration_ms == 0 || self.tick_rate_ms == 0 {
            return Err(TrackerError::Config(
                "Notification duration and tick rate must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.notification_duration(), Duration::from_millis(3_500));
        assert_eq!(settings.thresholds(), Thresholds::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            warning_threshold: 40.0,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol":"£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.notification_duration_ms, 3_500);
        assert_eq!(settings.critical_threshold, 25.0);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let settings = Settings {
            warning_threshold: 20.0,
            critical_threshold: 30.0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_load_rejects_bad_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(TrackerError::Config(_))
        ));
    }
}
