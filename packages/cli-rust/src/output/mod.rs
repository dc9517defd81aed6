//! Output utilities for CLI commands
//!
//! This module provides terminal output helpers: the `ERROR:` diagnostic
//! format and the post-init summary, which never prints generated secrets.

pub mod errors;
pub mod summary;

pub use errors::print_error;
pub use summary::print_summary;
