//! # smarthome-app
//!
//! Application layer — the home controller and its **output port**.
//!
//! ## Responsibilities
//! - Define the [`Console`](ports::Console) port that adapters implement
//! - Gate every device operation behind the "device is on" check
//!   ([`HomeController`](controller::HomeController))
//! - Keep the count of devices powered on through the controller
//! - Replay a list of [`Command`](smarthome_domain::command::Command)s
//!   ([`scenario`])
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only. Never imports adapter crates.

pub mod controller;
pub mod ports;
pub mod scenario;
