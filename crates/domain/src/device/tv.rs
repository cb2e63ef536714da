//! Smart TV — speaker volume and channel number, both range-limited.

use crate::bounded::BoundedProperty;
use crate::error::SmartHomeError;

use super::{DeviceInfo, SmartDevice};

/// A simulated television.
#[derive(Debug, Clone)]
pub struct TvDevice {
    info: DeviceInfo,
    speaker_volume: BoundedProperty,
    channel_number: BoundedProperty,
}

impl TvDevice {
    pub const DEVICE_TYPE: &'static str = "Smart TV";

    /// Create a TV with volume 2 (of 0–100) and channel 1 (of 0–200).
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if `name` or `category` is blank.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, SmartHomeError> {
        Ok(Self {
            info: DeviceInfo::new(name, category)?,
            speaker_volume: BoundedProperty::new(2, 0, 100),
            channel_number: BoundedProperty::new(1, 0, 200),
        })
    }

    #[must_use]
    pub fn speaker_volume(&self) -> i32 {
        self.speaker_volume.read()
    }

    #[must_use]
    pub fn channel_number(&self) -> i32 {
        self.channel_number.read()
    }

    pub fn increase_speaker_volume(&mut self) -> String {
        self.speaker_volume.increment();
        format!("Speaker volume increased to {}.", self.speaker_volume.read())
    }

    // No trailing period.
    pub fn decrease_speaker_volume(&mut self) -> String {
        self.speaker_volume.decrement();
        format!("Speaker volume decreased to {}", self.speaker_volume.read())
    }

    pub fn next_channel(&mut self) -> String {
        self.channel_number.increment();
        format!("Channel number increased to {}.", self.channel_number.read())
    }

    pub fn previous_channel(&mut self) -> String {
        self.channel_number.decrement();
        format!("Channel number decreased to {}.", self.channel_number.read())
    }
}

impl SmartDevice for TvDevice {
    fn device_type(&self) -> &'static str {
        Self::DEVICE_TYPE
    }

    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn turn_on(&mut self) -> String {
        self.info.power_on();
        format!(
            "{} is turned on. Speaker volume is set to {} and channel number is set to {}.",
            self.info.name(),
            self.speaker_volume.read(),
            self.channel_number.read()
        )
    }

    fn turn_off(&mut self) -> String {
        self.info.power_off();
        format!("{} turned off", self.info.name())
    }
}
