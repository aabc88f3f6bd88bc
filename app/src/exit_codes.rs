//! Stable exit codes for the CLI.

/// Greeting succeeded, help was printed, or the user cancelled the run.
pub const OK: i32 = 0;
/// Invalid input, bad configuration, or any unexpected failure.
pub const FAILURE: i32 = 1;
