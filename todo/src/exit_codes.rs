//! Stable exit codes for todo CLI commands.

/// Command completed, including invalid-id reports from mutating commands.
pub const OK: i32 = 0;
/// Unknown command, bad list filter, usage error, or a failed save.
pub const INVALID: i32 = 1;
