//! Port definitions — traits that adapters implement.

pub mod console;

pub use console::Console;
