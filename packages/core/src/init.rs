//! Secrets file initialization
//!
//! Ties the pieces together: check preconditions, read the template,
//! build replacements, render, and write the output file.

use crate::InitError;
use crate::replacements::{AppliedReplacement, build_replacements};
use crate::template::{Template, render};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Inputs for a single `init` run
#[derive(Clone)]
pub struct InitRequest {
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    /// Value for `LLM_BINDING_API_KEY`; empty means not supplied
    pub llm_key: Option<String>,
    pub force: bool,
}

/// What an `init` run changed
#[derive(Debug)]
pub struct InitReport {
    pub output_path: PathBuf,
    /// Keys rewritten in the output, in template order
    pub updated: Vec<AppliedReplacement>,
    /// Mapped keys with no assignment line in the template
    pub unapplied: Vec<String>,
}

/// Check that the template exists and the output may be written.
///
/// Touches nothing on disk.
pub fn validate_preconditions(
    template_path: &Path,
    output_path: &Path,
    force: bool,
) -> Result<(), InitError> {
    if !template_path.exists() {
        return Err(InitError::MissingTemplate(template_path.to_path_buf()));
    }
    if output_path.exists() && !force {
        return Err(InitError::OutputExists(output_path.to_path_buf()));
    }
    Ok(())
}

/// Open the output for writing, owner-only from creation on Unix.
#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies to newly created files.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<fs::File> {
    fs::File::create(path)
}

/// Write the rendered text, creating or truncating the file.
///
/// On Unix the file is restricted to its owner. A failed write is not
/// rolled back.
pub fn write_output(path: &Path, text: &str) -> Result<(), InitError> {
    let mut file = open_private(path).map_err(|e| InitError::write(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| InitError::write(path, e))?;

    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Materialize the secrets file described by `request`.
pub fn run_init(request: &InitRequest) -> Result<InitReport, InitError> {
    validate_preconditions(&request.template_path, &request.output_path, request.force)?;

    let template = Template::read(&request.template_path)?;
    let replacements = build_replacements(&template, request.llm_key.as_deref());
    if replacements.is_empty() {
        debug!("No replacements; copying template unchanged");
    }
    let rendered = render(&template, &replacements);

    write_output(&request.output_path, &rendered.text)?;

    let unapplied: Vec<String> = replacements
        .keys()
        .filter(|key| !rendered.applied.iter().any(|a| a.key == *key))
        .map(String::from)
        .collect();
    for key in &unapplied {
        debug!("{key} has no assignment line in the template; not written");
    }

    info!(
        "Initialized {} from {} ({} keys updated)",
        request.output_path.display(),
        request.template_path.display(),
        rendered.applied.len()
    );

    Ok(InitReport {
        output_path: request.output_path.clone(),
        updated: rendered.applied,
        unapplied,
    })
}
