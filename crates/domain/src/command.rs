//! Command — a named operation that can be issued against the home.
//!
//! Names are `snake_case` both in configuration files (serde) and in plain
//! strings ([`FromStr`]/[`Display`](std::fmt::Display)).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every operation a scenario can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    TurnOnTv,
    TurnOffTv,
    IncreaseTvVolume,
    DecreaseTvVolume,
    NextTvChannel,
    PreviousTvChannel,
    TurnOnLight,
    TurnOffLight,
    IncreaseLightBrightness,
    DecreaseLightBrightness,
    TurnOffAllDevices,
    PrintTvInfo,
    PrintLightInfo,
    /// Switch the TV on at the device itself, bypassing the controller.
    PressTvPower,
    /// Switch the light on at the device itself, bypassing the controller.
    PressLightPower,
}

impl Command {
    /// All commands, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::TurnOnTv,
        Self::TurnOffTv,
        Self::IncreaseTvVolume,
        Self::DecreaseTvVolume,
        Self::NextTvChannel,
        Self::PreviousTvChannel,
        Self::TurnOnLight,
        Self::TurnOffLight,
        Self::IncreaseLightBrightness,
        Self::DecreaseLightBrightness,
        Self::TurnOffAllDevices,
        Self::PrintTvInfo,
        Self::PrintLightInfo,
        Self::PressTvPower,
        Self::PressLightPower,
    ];

    /// The `snake_case` name of this command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TurnOnTv => "turn_on_tv",
            Self::TurnOffTv => "turn_off_tv",
            Self::IncreaseTvVolume => "increase_tv_volume",
            Self::DecreaseTvVolume => "decrease_tv_volume",
            Self::NextTvChannel => "next_tv_channel",
            Self::PreviousTvChannel => "previous_tv_channel",
            Self::TurnOnLight => "turn_on_light",
            Self::TurnOffLight => "turn_off_light",
            Self::IncreaseLightBrightness => "increase_light_brightness",
            Self::DecreaseLightBrightness => "decrease_light_brightness",
            Self::TurnOffAllDevices => "turn_off_all_devices",
            Self::PrintTvInfo => "print_tv_info",
            Self::PrintLightInfo => "print_light_info",
            Self::PressTvPower => "press_tv_power",
            Self::PressLightPower => "press_light_power",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = UnknownCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == name)
            .ok_or_else(|| UnknownCommandError {
                name: name.to_string(),
            })
    }
}

/// A command name that matches no [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command {name:?}")]
pub struct UnknownCommandError {
    /// The rejected name, trimmed.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_displayed_name() {
        for cmd in Command::ALL {
            assert_eq!(cmd.to_string().parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn should_ignore_surrounding_whitespace() {
        assert_eq!(
            " print_tv_info ".parse::<Command>(),
            Ok(Command::PrintTvInfo)
        );
    }

    #[test]
    fn should_reject_unknown_name() {
        let err = "reboot".parse::<Command>().unwrap_err();
        assert_eq!(err.name, "reboot");
        assert_eq!(err.to_string(), "unknown command \"reboot\"");
    }

    #[test]
    fn should_match_serde_names_with_display() {
        for cmd in Command::ALL {
            let json = serde_json::to_string(&cmd).unwrap();
            assert_eq!(json, format!("\"{cmd}\""));
        }
    }

    #[test]
    fn should_deserialize_from_snake_case() {
        let cmd: Command = serde_json::from_str("\"decrease_light_brightness\"").unwrap();
        assert_eq!(cmd, Command::DecreaseLightBrightness);
    }
}
