//! Deterministic, pure logic over the in-memory todo collection.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod collection;
pub mod filter;
pub mod types;
