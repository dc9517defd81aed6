//! prod-env core library
//!
//! This crate provides the shared functionality for materializing a runtime
//! secrets env file from a checked-in template:
//! - Template model that preserves every source line verbatim
//! - Placeholder detection and replacement maps
//! - Cryptographically secure, URL-safe token generation
//! - Precondition checks and output writing

pub mod config;
pub mod constants;
mod error;
pub mod init;
pub mod replacements;
pub mod secrets;
pub mod template;

pub use error::InitError;
pub use init::{InitReport, InitRequest, run_init, validate_preconditions, write_output};
pub use replacements::{
    AppliedReplacement, Replacement, ReplacementMap, ReplacementSource, build_replacements,
};
pub use secrets::{SecretKind, generate_secret};
pub use template::{Line, Rendered, Template, classify, render};

/// Get the version of the prod-env-core library
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
