//! Error types for secrets file initialization

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while materializing the secrets file
#[derive(Debug, Error)]
pub enum InitError {
    /// The template env file does not exist
    #[error("Template file not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    /// The output file exists and overwriting was not requested
    #[error("Output file already exists: {} (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    /// Reading the template or writing the output failed
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InitError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action: "write",
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_exists_mentions_force() {
        let err = InitError::OutputExists(PathBuf::from(".prod.secrets.env"));
        let msg = err.to_string();
        assert!(msg.contains(".prod.secrets.env"));
        assert!(msg.contains("--force"));
    }

    #[test]
    fn io_error_includes_action_and_path() {
        let err = InitError::write(
            "/tmp/out.env",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to write /tmp/out.env: denied");
    }
}
