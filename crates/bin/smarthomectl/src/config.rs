//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory unless a path is given
//! on the command line. Every field has a sensible default (a small demo
//! home) so the file is optional. Environment variables take precedence over
//! file values.

use std::path::Path;

use serde::Deserialize;
use smarthome_domain::device::{Device, DeviceKind};

/// File read when no `--config` path is given.
pub const DEFAULT_CONFIG_PATH: &str = "smarthome.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// How results are printed.
    pub output: OutputConfig,
    /// Devices to register, in order.
    pub devices: Vec<Device>,
    /// Scene defaults.
    pub scenes: ScenesConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One status string per line.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScenesConfig {
    pub quick_breakfast: QuickBreakfastConfig,
    pub night_cleaning: NightCleaningConfig,
}

/// Devices and beverage used by the quick breakfast scene.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QuickBreakfastConfig {
    pub blinds: String,
    pub coffee_maker: String,
    pub beverage: String,
}

/// Night cleaning scene.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NightCleaningConfig {
    /// Schedule cleaning before every `turn-off-all`.
    pub enabled: bool,
    /// Cleaning appliance to start.
    pub device: String,
}

impl Config {
    /// Load configuration from `path` (or `smarthome.toml` when `None`),
    /// then apply environment-variable overrides.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_optional_file(Path::new(DEFAULT_CONFIG_PATH))?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SMARTHOME_OUTPUT") {
            match val.as_str() {
                "text" => self.output.format = OutputFormat::Text,
                "json" => self.output.format = OutputFormat::Json,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let night = &self.scenes.night_cleaning;
        if night.enabled && night.device.is_empty() {
            return Err(ConfigError::Validation(
                "night cleaning is enabled but no device is set".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            output: OutputConfig::default(),
            devices: default_devices(),
            scenes: ScenesConfig::default(),
        }
    }
}

fn default_devices() -> Vec<Device> {
    vec![
        Device::new(DeviceKind::SwitchableLight, "Living Room Light"),
        Device::new(DeviceKind::SwitchableLight, "Dining Room Light"),
        Device::new(DeviceKind::NetworkableLight, "Kitchen Light"),
        Device::new(DeviceKind::DimmableLight, "Bedroom Light"),
        Device::new(DeviceKind::CoffeeMaker, "Coffee Maker"),
        Device::new(DeviceKind::AirConditioner, "AC"),
        Device::new(DeviceKind::Blinds, "Bedroom Blinds"),
        Device::new(DeviceKind::VacuumCleaner, "Vacuum Cleaner"),
    ]
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthomectl=warn,smarthome_app=warn".to_string(),
        }
    }
}

impl Default for QuickBreakfastConfig {
    fn default() -> Self {
        Self {
            blinds: "Bedroom Blinds".to_string(),
            coffee_maker: "Coffee Maker".to_string(),
            beverage: "Colombian".to_string(),
        }
    }
}

impl Default for NightCleaningConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            device: "Vacuum Cleaner".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_demo_home_by_default() {
        let config = Config::default();
        assert_eq!(config.devices.len(), 8);
        assert_eq!(config.devices[0].name(), "Living Room Light");
        assert_eq!(config.devices[7].kind(), DeviceKind::VacuumCleaner);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.scenes.quick_breakfast.beverage, "Colombian");
        assert!(!config.scenes.night_cleaning.enabled);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.devices.len(), 8);
        assert_eq!(config.scenes.quick_breakfast.blinds, "Bedroom Blinds");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [output]
            format = 'json'

            [[devices]]
            kind = 'blinds'
            name = 'Study Blinds'

            [[devices]]
            kind = 'coffee_maker'
            name = 'Espresso'

            [[devices]]
            kind = 'vacuum_cleaner'
            name = 'Robo'

            [scenes.quick_breakfast]
            blinds = 'Study Blinds'
            coffee_maker = 'Espresso'
            beverage = 'Arabica'

            [scenes.night_cleaning]
            enabled = true
            device = 'Robo'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(
            config.devices,
            [
                Device::new(DeviceKind::Blinds, "Study Blinds"),
                Device::new(DeviceKind::CoffeeMaker, "Espresso"),
                Device::new(DeviceKind::VacuumCleaner, "Robo"),
            ]
        );
        assert_eq!(config.scenes.quick_breakfast.coffee_maker, "Espresso");
        assert_eq!(config.scenes.quick_breakfast.beverage, "Arabica");
        assert!(config.scenes.night_cleaning.enabled);
        assert_eq!(config.scenes.night_cleaning.device, "Robo");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [scenes.quick_breakfast]
            beverage = 'Kona'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scenes.quick_breakfast.beverage, "Kona");
        assert_eq!(config.scenes.quick_breakfast.coffee_maker, "Coffee Maker");
        assert_eq!(config.devices.len(), 8);
    }

    #[test]
    fn should_accept_empty_device_list() {
        let config: Config = toml::from_str("devices = []").unwrap();
        assert!(config.devices.is_empty());
    }

    #[test]
    fn should_reject_unknown_device_kind() {
        let toml = "
            [[devices]]
            kind = 'toaster'
            name = 'Toaster'
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_default_file_not_found() {
        let config = Config::from_optional_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.devices.len(), 8);
    }

    #[test]
    fn should_fail_when_explicit_file_not_found() {
        let result = Config::from_file(Path::new("nonexistent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn should_reject_enabled_night_cleaning_without_device() {
        let mut config = Config::default();
        config.scenes.night_cleaning.enabled = true;
        config.scenes.night_cleaning.device = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }
}
