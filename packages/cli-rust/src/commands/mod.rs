//! CLI command implementations
//!
//! `init` is the only command: it writes the secrets env file.

mod init;

pub use init::{InitArgs, cmd_init};
