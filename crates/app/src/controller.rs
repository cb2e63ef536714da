//! Home controller — gates device operations and counts powered-on devices.
//!
//! Every operation first checks that the target device already reports
//! [`DeviceStatus::On`](smarthome_domain::device::DeviceStatus::On). When it
//! does not, the operation is skipped and a `Cannot … Device is not on.`
//! line is written instead. This includes `turn_on_tv` / `turn_on_light`:
//! the controller only ever "turns on" a device that is already on, so a
//! freshly built device (status `online`) must be switched on at the device
//! itself (see [`HomeController::tv_mut`]) before the controller accepts
//! any operation on it.

use smarthome_domain::command::Command;
use smarthome_domain::device::{LightDevice, SmartDevice, TvDevice};

use crate::ports::Console;

/// Owns one TV and one light and mediates every operation on them.
pub struct HomeController<C> {
    tv: TvDevice,
    light: LightDevice,
    powered_on_count: i32,
    console: C,
}

impl<C: Console> HomeController<C> {
    /// Take ownership of both devices; all output goes to `console`.
    #[must_use]
    pub fn new(tv: TvDevice, light: LightDevice, console: C) -> Self {
        Self {
            tv,
            light,
            powered_on_count: 0,
            console,
        }
    }

    /// Net number of controller-mediated turn-ons minus turn-offs.
    #[must_use]
    pub fn powered_on_count(&self) -> i32 {
        self.powered_on_count
    }

    #[must_use]
    pub fn tv(&self) -> &TvDevice {
        &self.tv
    }

    /// Direct access to the TV, bypassing the gate and the counter.
    pub fn tv_mut(&mut self) -> &mut TvDevice {
        &mut self.tv
    }

    #[must_use]
    pub fn light(&self) -> &LightDevice {
        &self.light
    }

    /// Direct access to the light, bypassing the gate and the counter.
    pub fn light_mut(&mut self) -> &mut LightDevice {
        &mut self.light
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Give back the console, dropping the devices.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    #[tracing::instrument(skip(self))]
    pub fn turn_on_tv(&mut self) {
        if Self::check(&self.tv, &mut self.console, "turn on TV") {
            self.powered_on_count += 1;
            let line = self.tv.turn_on();
            self.console.println(&line);
            tracing::info!(
                device_id = %self.tv.info().id(),
                powered_on = self.powered_on_count,
                "tv turned on"
            );
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn turn_off_tv(&mut self) {
        if Self::check(&self.tv, &mut self.console, "turn off TV") {
            self.powered_on_count -= 1;
            let line = self.tv.turn_off();
            self.console.println(&line);
            tracing::info!(
                device_id = %self.tv.info().id(),
                powered_on = self.powered_on_count,
                "tv turned off"
            );
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn increase_tv_volume(&mut self) {
        if Self::check(&self.tv, &mut self.console, "increase TV volume") {
            let line = self.tv.increase_speaker_volume();
            self.console.println(&line);
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn decrease_tv_volume(&mut self) {
        if Self::check(&self.tv, &mut self.console, "decrease TV volume") {
            let line = self.tv.decrease_speaker_volume();
            self.console.println(&line);
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn next_tv_channel(&mut self) {
        if Self::check(&self.tv, &mut self.console, "change TV channel") {
            let line = self.tv.next_channel();
            self.console.println(&line);
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn previous_tv_channel(&mut self) {
        if Self::check(&self.tv, &mut self.console, "change TV channel") {
            let line = self.tv.previous_channel();
            self.console.println(&line);
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn turn_on_light(&mut self) {
        if Self::check(&self.light, &mut self.console, "turn on light") {
            self.powered_on_count += 1;
            let line = self.light.turn_on();
            self.console.println(&line);
            tracing::info!(
                device_id = %self.light.info().id(),
                powered_on = self.powered_on_count,
                "light turned on"
            );
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn turn_off_light(&mut self) {
        if Self::check(&self.light, &mut self.console, "turn off light") {
            self.powered_on_count -= 1;
            let line = self.light.turn_off();
            self.console.println(&line);
            tracing::info!(
                device_id = %self.light.info().id(),
                powered_on = self.powered_on_count,
                "light turned off"
            );
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn increase_light_brightness(&mut self) {
        if Self::check(&self.light, &mut self.console, "increase light brightness") {
            let line = self.light.increase_brightness();
            self.console.println(&line);
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn decrease_light_brightness(&mut self) {
        if Self::check(&self.light, &mut self.console, "decrease light brightness") {
            let line = self.light.decrease_brightness();
            self.console.println(&line);
        }
    }

    /// Turn off the TV, then the light. Each step is gated on its own.
    pub fn turn_off_all_devices(&mut self) {
        self.turn_off_tv();
        self.turn_off_light();
    }

    /// Writes the TV description with no trailing newline.
    #[tracing::instrument(skip(self))]
    pub fn print_tv_info(&mut self) {
        if Self::check(&self.tv, &mut self.console, "print TV info") {
            let text = self.tv.describe();
            self.console.print(&text);
        }
    }

    /// Writes the light description with no trailing newline.
    #[tracing::instrument(skip(self))]
    pub fn print_light_info(&mut self) {
        if Self::check(&self.light, &mut self.console, "print light info") {
            let text = self.light.describe();
            self.console.print(&text);
        }
    }

    /// Run the operation named by `command`.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::TurnOnTv => self.turn_on_tv(),
            Command::TurnOffTv => self.turn_off_tv(),
            Command::IncreaseTvVolume => self.increase_tv_volume(),
            Command::DecreaseTvVolume => self.decrease_tv_volume(),
            Command::NextTvChannel => self.next_tv_channel(),
            Command::PreviousTvChannel => self.previous_tv_channel(),
            Command::TurnOnLight => self.turn_on_light(),
            Command::TurnOffLight => self.turn_off_light(),
            Command::IncreaseLightBrightness => self.increase_light_brightness(),
            Command::DecreaseLightBrightness => self.decrease_light_brightness(),
            Command::TurnOffAllDevices => self.turn_off_all_devices(),
            Command::PrintTvInfo => self.print_tv_info(),
            Command::PrintLightInfo => self.print_light_info(),
            Command::PressTvPower => {
                let line = self.tv.turn_on();
                self.console.println(&line);
            }
            Command::PressLightPower => {
                let line = self.light.turn_on();
                self.console.println(&line);
            }
        }
    }

    /// `true` when `device` is on; otherwise reports `action` as refused.
    fn check(device: &impl SmartDevice, console: &mut C, action: &str) -> bool {
        if device.is_on() {
            return true;
        }
        tracing::debug!(
            device_id = %device.info().id(),
            device = device.name(),
            status = %device.status(),
            action,
            "device is not on"
        );
        console.println(&format!("Cannot {action}. Device is not on."));
        false
    }
}
