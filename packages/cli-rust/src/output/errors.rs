//! Centralized error formatting
//!
//! Every failure is printed to stderr as `ERROR: <message>`, followed by an
//! actionable tip when the cause is known.

use console::style;
use prod_env_core::InitError;
use prod_env_core::constants::DEPLOY_DIR_ENV;

/// Tip lines for errors with a known fix
fn error_tips(e: &anyhow::Error) -> Vec<String> {
    match e.downcast_ref::<InitError>() {
        Some(InitError::MissingTemplate(_)) => vec![format!(
            "{} Run from the deployment directory, set {}, or pass {}.",
            style("Tip:").cyan(),
            style(DEPLOY_DIR_ENV).green(),
            style("--template <file>").green()
        )],
        Some(InitError::OutputExists(_)) => vec![format!(
            "{} Rerun with {} to regenerate all secrets.",
            style("Tip:").cyan(),
            style("--force").green()
        )],
        _ => Vec::new(),
    }
}

/// Format an error with its tips
pub fn format_error(e: &anyhow::Error) -> String {
    let mut msg = format!("{} {e}", style("ERROR:").red().bold());
    for tip in error_tips(e) {
        msg.push_str("\n  ");
        msg.push_str(&tip);
    }
    msg
}

/// Show an error on stderr
pub fn print_error(e: &anyhow::Error) {
    eprintln!("{}", format_error(e));
}
