//! Device — a simulated appliance with identity, category and power status.
//!
//! Shared state lives in [`DeviceInfo`], which every concrete device embeds.
//! Variant behaviour (what happens on power changes, the type label) is
//! provided through the [`SmartDevice`] trait.
//!
//! Device operations never print. They return the text a real appliance
//! would display so the caller decides where it goes.

mod light;
mod status;
mod tv;

pub use light::LightDevice;
pub use status::DeviceStatus;
pub use tv::TvDevice;

use crate::error::{SmartHomeError, ValidationError};
use crate::id::DeviceId;

/// Identity and power status common to every device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    id: DeviceId,
    name: String,
    category: String,
    status: DeviceStatus,
}

impl DeviceInfo {
    /// Create a record in the [`DeviceStatus::Online`] state.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] with
    /// [`ValidationError::EmptyName`] or [`ValidationError::EmptyCategory`]
    /// when either field is blank.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, SmartHomeError> {
        let name = name.into();
        let category = category.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        Ok(Self {
            id: DeviceId::new(),
            name,
            category,
            status: DeviceStatus::default(),
        })
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// `Device name: {name}, category: {category}`
    #[must_use]
    pub fn describe(&self) -> String {
        format!("Device name: {}, category: {}", self.name, self.category)
    }

    pub(crate) fn power_on(&mut self) {
        self.status = DeviceStatus::On;
    }

    pub(crate) fn power_off(&mut self) {
        self.status = DeviceStatus::Off;
    }
}

/// Behaviour shared by every simulated device.
pub trait SmartDevice {
    /// Fixed label of the device kind, e.g. `Smart TV`.
    fn device_type(&self) -> &'static str;

    /// The shared identity/status record.
    fn info(&self) -> &DeviceInfo;

    /// Switch the device on, returning its announcement line.
    fn turn_on(&mut self) -> String;

    /// Switch the device off, returning its announcement line.
    fn turn_off(&mut self) -> String;

    /// One-line description without a trailing newline.
    fn describe(&self) -> String {
        format!("{} type: {}", self.info().describe(), self.device_type())
    }

    fn name(&self) -> &str {
        self.info().name()
    }

    fn status(&self) -> DeviceStatus {
        self.info().status()
    }

    /// Whether the device currently reports [`DeviceStatus::On`].
    fn is_on(&self) -> bool {
        self.status().is_on()
    }
}
