//! Smart light — a single range-limited brightness level.

use crate::bounded::BoundedProperty;
use crate::error::SmartHomeError;

use super::{DeviceInfo, SmartDevice};

const BRIGHTNESS_ON: i32 = 2;
const BRIGHTNESS_OFF: i32 = 0;

/// A simulated dimmable light.
#[derive(Debug, Clone)]
pub struct LightDevice {
    info: DeviceInfo,
    brightness_level: BoundedProperty,
}

impl LightDevice {
    pub const DEVICE_TYPE: &'static str = "Smart Light";

    /// Create a light with brightness 0 (of 0–100).
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
            brightness_level: BoundedProperty::new(BRIGHTNESS_OFF, 0, 100),
        })
    }

    #[must_use]
    pub fn brightness_level(&self) -> i32 {
        self.brightness_level.read()
    }

    pub fn increase_brightness(&mut self) -> String {
        self.brightness_level.increment();
        format!("Brightness increased to {}.", self.brightness_level.read())
    }

    pub fn decrease_brightness(&mut self) -> String {
        self.brightness_level.decrement();
        format!("Brightness decreased to {}.", self.brightness_level.read())
    }
}

impl SmartDevice for LightDevice {
    fn device_type(&self) -> &'static str {
        Self::DEVICE_TYPE
    }

    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn turn_on(&mut self) -> String {
        self.info.power_on();
        self.brightness_level.write(BRIGHTNESS_ON);
        format!(
            "{} turned on. The brightness level is {}.",
            self.info.name(),
            self.brightness_level.read()
        )
    }

    // Uses the device type, not the configured name.
    fn turn_off(&mut self) -> String {
        self.info.power_off();
        self.brightness_level.write(BRIGHTNESS_OFF);
        format!("{} turned off", Self::DEVICE_TYPE)
    }
}
