//! # smarthomed — smarthome demo runner
//!
//! Composition root that wires the devices, the controller and the console
//! together and runs the configured scenario.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` (diagnostics go to stderr, stdout carries only
//!   device output)
//! - Construct the TV, the light and the home controller
//! - Run the scenario against the stdout console
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.
//!
//! Configuration problems never change the exit status: they are logged and
//! the built-in demo runs instead.

mod config;

use smarthome_adapter_console::StdoutConsole;
use smarthome_app::controller::HomeController;
use smarthome_app::scenario::run_scenario;
use smarthome_domain::device::SmartDevice;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(err) = load_error {
        tracing::warn!(error = ?err, "invalid configuration, running built-in demo");
    }

    // Devices
    let (tv, light) = config.build_devices()?;
    tracing::info!(
        tv = %tv.info().id(),
        light = %light.info().id(),
        steps = config.scenario.steps.len(),
        "smarthomed starting"
    );

    // Controller
    let mut home = HomeController::new(tv, light, StdoutConsole);
    run_scenario(&mut home, &config.scenario.steps);

    Ok(())
}
