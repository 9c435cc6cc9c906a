//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any fatal error: missing directory, document or marker, bad config
pub const FAILURE: i32 = 1;
