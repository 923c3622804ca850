//! Single-user todo list manager backed by a local JSON file.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic over the ordered collection
//!   (positional ids, filters, mutation outcomes). No I/O.
//! - **[`io`]**: Side-effecting operations (data file, config, console).
//!
//! [`repository`] ties the collection to its store and saves after every
//! applied change. Two surfaces drive it: [`dispatch`] for one-shot commands
//! and [`session`] for the interactive menu.

pub mod core;
pub mod dispatch;
pub mod exit_codes;
pub mod io;
pub mod item;
pub mod logging;
pub mod render;
pub mod repository;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
