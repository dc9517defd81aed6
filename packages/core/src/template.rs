//! Line-preserving env template model and rendering.
//!
//! A template is kept as the exact sequence of source lines, each with its
//! own terminator. Rendering rewrites only assignment lines whose key has a
//! replacement; every other line is copied byte for byte.

use crate::InitError;
use crate::replacements::{AppliedReplacement, ReplacementMap};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Classification of a single template line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank, comment, or no `=`: copied verbatim
    Passthrough,
    /// `KEY=VALUE`, split on the first `=`
    Assignment { key: &'a str, value: &'a str },
}

/// Ordered lines of a template env file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    lines: Vec<String>,
}

/// Output of [`render`]
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    /// Replacements that matched at least one line, in template order
    pub applied: Vec<AppliedReplacement>,
}

impl Template {
    /// Split text into lines, keeping each line's terminator.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(String::from).collect(),
        }
    }

    /// Read and parse a template file.
    pub fn read(path: &Path) -> Result<Self, InitError> {
        let text = fs::read_to_string(path).map_err(|e| InitError::read(path, e))?;
        let template = Self::parse(&text);
        debug!(
            "Read template {} ({} lines)",
            path.display(),
            template.lines.len()
        );
        Ok(template)
    }

    /// Lines including their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub(crate) fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Classify a template line.
///
/// The key is trimmed of surrounding whitespace; the value is everything
/// after the first `=` up to the line terminator, uninterpreted.
pub fn classify(line: &str) -> Line<'_> {
    let content = strip_terminator(line);
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Passthrough;
    }
    match content.split_once('=') {
        Some((key, value)) => Line::Assignment {
            key: key.trim(),
            value,
        },
        None => Line::Passthrough,
    }
}

/// Render the template with replacement values substituted.
///
/// The output has exactly one line per template line. A replaced line is
/// emitted as `KEY=VALUE\n`.
pub fn render(template: &Template, replacements: &ReplacementMap) -> Rendered {
    let mut text = String::with_capacity(template.lines().map(str::len).sum());
    let mut applied: Vec<AppliedReplacement> = Vec::new();

    for line in template.lines() {
        let replacement = match classify(line) {
            Line::Assignment { key, .. } => replacements.get(key).map(|r| (key, r)),
            Line::Passthrough => None,
        };

        match replacement {
            Some((key, replacement)) => {
                text.push_str(key);
                text.push('=');
                text.push_str(replacement.value());
                text.push('\n');
                if !applied.iter().any(|a| a.key == key) {
                    applied.push(AppliedReplacement {
                        key: key.to_string(),
                        replacement: replacement.clone(),
                    });
                }
            }
            None => text.push_str(line),
        }
    }

    Rendered { text, applied }
}
