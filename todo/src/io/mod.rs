//! I/O helpers: data file persistence, configuration and console prompting.

pub mod config;
pub mod console;
pub mod store;
