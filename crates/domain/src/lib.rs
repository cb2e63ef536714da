//! # smarthome-domain
//!
//! Pure domain model for the smarthome simulation.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **bounded property** used for every ranged device attribute
//! - Define **Devices** (a TV and a light sharing a common record)
//! - Define **Commands** (the named operations a scenario can issue)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Device operations return the text they would display; writing it out
//! is the job of the `app` crate's console port.

pub mod error;
pub mod id;

pub mod bounded;
pub mod command;
pub mod device;
