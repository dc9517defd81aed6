//! Path resolution for the template and secrets files
//!
//! The deployment directory holds the checked-in `.prod.env` template.
//! The generated secrets file lands next to it unless redirected.

use crate::constants::{DEPLOY_DIR_ENV, OUTPUT_FILE_NAME, TEMPLATE_FILE_NAME};
use std::io;
use std::path::{Path, PathBuf};

/// Resolve the deployment directory.
///
/// Uses `PROD_ENV_DIR` when set and non-empty, otherwise the current
/// working directory.
pub fn deploy_dir() -> io::Result<PathBuf> {
    deploy_dir_from(std::env::var_os(DEPLOY_DIR_ENV).map(PathBuf::from))
}

fn deploy_dir_from(configured: Option<PathBuf>) -> io::Result<PathBuf> {
    match configured {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir),
        _ => std::env::current_dir(),
    }
}

/// Template path inside a deployment directory
pub fn default_template_path(deploy_dir: &Path) -> PathBuf {
    deploy_dir.join(TEMPLATE_FILE_NAME)
}

/// Secrets file path, sibling to the template
pub fn default_output_path(template_path: &Path) -> PathBuf {
    match template_path.parent() {
        Some(parent) => parent.join(OUTPUT_FILE_NAME),
        None => PathBuf::from(OUTPUT_FILE_NAME),
    }
}
