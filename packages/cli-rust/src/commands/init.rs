//! Init command implementation
//!
//! Generates the production secrets file from the `.prod.env` template.

use crate::output::print_summary;
use anyhow::{Result, anyhow};
use clap::Args;
use prod_env_core::config::{default_output_path, default_template_path, deploy_dir};
use prod_env_core::{InitRequest, run_init};
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Output file (default: .prod.secrets.env next to the template)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Value to write for LLM_BINDING_API_KEY
    #[arg(long, value_name = "KEY", allow_hyphen_values = true)]
    pub llm_key: Option<String>,

    /// Template file (default: .prod.env in $PROD_ENV_DIR or the current directory)
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,
}

/// Resolve the template and output paths for a run
fn build_request(args: &InitArgs) -> Result<InitRequest> {
    let template_path = match &args.template {
        Some(path) => path.clone(),
        None => {
            let dir = deploy_dir()
                .map_err(|e| anyhow!("Could not determine deployment directory: {e}"))?;
            default_template_path(&dir)
        }
    };
    let output_path = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&template_path));

    Ok(InitRequest {
        template_path,
        output_path,
        llm_key: args.llm_key.clone(),
        force: args.force,
    })
}

/// Run the init command
///
/// This command:
/// 1. Resolves the template and output paths
/// 2. Refuses to run if the template is missing or the output exists without --force
/// 3. Replaces CHANGE_ME placeholders with fresh secrets and writes the output
pub fn cmd_init(args: &InitArgs, quiet: bool) -> Result<()> {
    let request = build_request(args)?;
    let report = run_init(&request)?;

    if !quiet {
        print_summary(&report);
    }

    Ok(())
}
