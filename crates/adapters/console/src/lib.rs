//! # smarthome-adapter-console
//!
//! Implementations of the [`Console`] output port.
//!
//! | Adapter | Writes to | Use |
//! |---------|-----------|-----|
//! | [`StdoutConsole`] | process standard output | the `smarthomed` binary |
//! | [`BufferConsole`] | an in-memory `String` | tests and embedding |
//!
//! ## Dependency rule
//!
//! Depends on `smarthome-app` (port traits) only.

mod buffer;
mod stdout;

pub use buffer::BufferConsole;
pub use stdout::StdoutConsole;

pub use smarthome_app::ports::Console;
