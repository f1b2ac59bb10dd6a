//! Stable exit codes for the interpreter CLI.

/// Program halted naturally (no rule matched).
pub const OK: i32 = 0;
/// Malformed source, unreadable file, stream failure, or other error.
pub const INVALID: i32 = 1;
/// The configured iteration bound was exceeded before a natural halt.
pub const BOUND_EXCEEDED: i32 = 2;
