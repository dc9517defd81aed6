//! Shared CLI constants.

/// Exit status for validation and I/O failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when no command or an unknown command is given.
pub const EXIT_USAGE: u8 = 2;
