//! prod-env CLI - Materialize production secrets from an env template
//!
//! This is the main entry point for the Rust CLI binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    prod_env::run()
}
