//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory. Every field has a
//! default matching the built-in demo, so the file is optional. Environment
//! variables take precedence over file values.

use serde::Deserialize;
use smarthome_app::scenario::DEFAULT_SCENARIO;
use smarthome_domain::command::Command;
use smarthome_domain::device::{LightDevice, TvDevice};
use smarthome_domain::error::SmartHomeError;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The television.
    pub tv: TvConfig,
    /// The light.
    pub light: LightConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Commands to run at startup.
    pub scenario: ScenarioConfig,
}

/// Television identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TvConfig {
    pub name: String,
    pub category: String,
}

/// Light identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub name: String,
    pub category: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Startup scenario.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Command names, run in order.
    pub steps: Vec<Command>,
}

impl Config {
    /// Load configuration from `smarthome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override names an unknown command, or if a device name or category
    /// is blank.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("smarthome.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("SMARTHOME_TV_NAME") {
            self.tv.name = val;
        }
        if let Some(val) = lookup("SMARTHOME_LIGHT_NAME") {
            self.light.name = val;
        }
        if let Some(val) = lookup("SMARTHOME_SCENARIO") {
            self.scenario.steps = parse_steps(&val)?;
        }
        if let Some(val) = lookup("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.build_devices().map(|_| ())
    }

    /// Construct the two devices described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Domain`] if a name or category is blank.
    pub fn build_devices(&self) -> Result<(TvDevice, LightDevice), ConfigError> {
        let tv = TvDevice::new(&self.tv.name, &self.tv.category)?;
        let light = LightDevice::new(&self.light.name, &self.light.category)?;
        Ok((tv, light))
    }
}

/// Parse a comma-separated list of command names, skipping empty entries.
fn parse_steps(list: &str) -> Result<Vec<Command>, SmartHomeError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<Command>().map_err(SmartHomeError::from))
        .collect()
}

impl Default for TvConfig {
    fn default() -> Self {
        Self {
            name: "Android TV".to_string(),
            category: "Entertainment".to_string(),
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            name: "Google Light".to_string(),
            category: "Utility".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthomed=info,smarthome_app=info".to_string(),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_SCENARIO.to_vec(),
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
    /// A device name or category is blank, or a scenario step names no
    /// known command.
    #[error("invalid configuration")]
    Domain(#[from] SmartHomeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthome_domain::device::SmartDevice;
    use smarthome_domain::error::ValidationError;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_demo_defaults() {
        let config = Config::default();
        assert_eq!(config.tv.name, "Android TV");
        assert_eq!(config.tv.category, "Entertainment");
        assert_eq!(config.light.name, "Google Light");
        assert_eq!(config.light.category, "Utility");
        assert_eq!(
            config.scenario.steps,
            vec![Command::DecreaseLightBrightness, Command::PrintTvInfo]
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tv.name, "Android TV");
        assert_eq!(config.scenario.steps.len(), 2);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [tv]
            name = 'Living Room TV'
            category = 'Media'

            [light]
            name = 'Desk Lamp'
            category = 'Office'

            [logging]
            filter = 'debug'

            [scenario]
            steps = ['press_tv_power', 'turn_on_tv', 'print_tv_info']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tv.name, "Living Room TV");
        assert_eq!(config.tv.category, "Media");
        assert_eq!(config.light.name, "Desk Lamp");
        assert_eq!(config.light.category, "Office");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(
            config.scenario.steps,
            vec![
                Command::PressTvPower,
                Command::TurnOnTv,
                Command::PrintTvInfo
            ]
        );
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [tv]
            name = 'Bedroom TV'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tv.name, "Bedroom TV");
        assert_eq!(config.tv.category, "Entertainment");
        assert_eq!(config.light.name, "Google Light");
    }

    #[test]
    fn should_report_parse_error_for_unknown_command_in_toml() {
        let result: Result<Config, _> = toml::from_str("[scenario]\nsteps = ['reboot']");
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.tv.name, "Android TV");
    }

    #[test]
    fn should_override_names_from_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("SMARTHOME_TV_NAME", "Den TV"),
                ("SMARTHOME_LIGHT_NAME", "Porch Light"),
            ]))
            .unwrap();
        assert_eq!(config.tv.name, "Den TV");
        assert_eq!(config.light.name, "Porch Light");
    }

    #[test]
    fn should_override_scenario_from_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[(
                "SMARTHOME_SCENARIO",
                "press_light_power, increase_light_brightness,,print_light_info",
            )]))
            .unwrap();
        assert_eq!(
            config.scenario.steps,
            vec![
                Command::PressLightPower,
                Command::IncreaseLightBrightness,
                Command::PrintLightInfo
            ]
        );
    }

    #[test]
    fn should_allow_empty_scenario_from_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("SMARTHOME_SCENARIO", "")]))
            .unwrap();
        assert!(config.scenario.steps.is_empty());
    }

    #[test]
    fn should_reject_unknown_command_from_env() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("SMARTHOME_SCENARIO", "turn_on_tv,reboot")]));
        assert!(matches!(
            result,
            Err(ConfigError::Domain(SmartHomeError::UnknownCommand(err))) if err.name == "reboot"
        ));
    }

    #[test]
    fn should_prefer_rust_log_over_smarthome_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("SMARTHOME_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_use_app_and_binary_targets_in_default_filter() {
        assert_eq!(
            Config::default().logging.filter,
            "smarthomed=info,smarthome_app=info"
        );
    }

    #[test]
    fn should_accept_default_devices() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_blank_device_name() {
        let mut config = Config::default();
        config.light.name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Domain(SmartHomeError::Validation(
                ValidationError::EmptyName
            )))
        ));
    }

    #[test]
    fn should_reject_blank_device_category() {
        let mut config = Config::default();
        config.tv.category = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Domain(SmartHomeError::Validation(
                ValidationError::EmptyCategory
            )))
        ));
    }

    #[test]
    fn should_build_devices_with_configured_names() {
        let mut config = Config::default();
        config.tv.name = "Den TV".to_string();
        let (tv, light) = config.build_devices().unwrap();
        assert_eq!(tv.name(), "Den TV");
        assert_eq!(light.name(), "Google Light");
    }
}
