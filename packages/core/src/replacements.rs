//! Replacement maps built from template placeholders.

use crate::constants::{
    LIGHTRAG_API_KEY, LLM_BINDING_API_KEY, NEO4J_PASSWORD, PLACEHOLDER, TOKEN_SECRET,
};
use crate::secrets::{SecretKind, generate_secret};
use crate::template::{Template, strip_terminator};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Keys generated when the template marks them with the placeholder.
pub const PLACEHOLDER_KEYS: [(&str, SecretKind); 3] = [
    (LIGHTRAG_API_KEY, SecretKind::ApiKey),
    (TOKEN_SECRET, SecretKind::Password),
    (NEO4J_PASSWORD, SecretKind::Password),
];

/// Where a replacement value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementSource {
    Generated(SecretKind),
    Supplied,
}

/// A value to substitute for a key.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Replacement {
    value: String,
    source: ReplacementSource,
}

impl Replacement {
    pub fn generated(kind: SecretKind) -> Self {
        Self {
            value: generate_secret(kind),
            source: ReplacementSource::Generated(kind),
        }
    }

    pub fn supplied(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ReplacementSource::Supplied,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> ReplacementSource {
        self.source
    }

    /// Terminal-safe description of the value.
    ///
    /// Generated secrets are never shown. Supplied values show only their
    /// last 4 characters.
    pub fn redacted(&self) -> String {
        match self.source {
            ReplacementSource::Generated(_) => "(generated)".to_string(),
            ReplacementSource::Supplied => {
                let chars: Vec<char> = self.value.chars().collect();
                let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
                format!("...{tail}")
            }
        }
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replacement")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// A replacement that matched a template line
#[derive(Debug, Clone)]
pub struct AppliedReplacement {
    pub key: String,
    pub replacement: Replacement,
}

/// Key to replacement value
#[derive(Debug, Clone, Default)]
pub struct ReplacementMap {
    entries: BTreeMap<String, Replacement>,
}

impl ReplacementMap {
    /// Insert or overwrite the replacement for a key.
    pub fn insert(&mut self, key: impl Into<String>, replacement: Replacement) {
        self.entries.insert(key.into(), replacement);
    }

    pub fn get(&self, key: &str) -> Option<&Replacement> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a line is exactly `KEY=CHANGE_ME`, ignoring surrounding whitespace.
fn is_placeholder_line(line: &str, key: &str) -> bool {
    strip_terminator(line)
        .trim()
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .is_some_and(|value| value == PLACEHOLDER)
}

/// Build the replacement map for a template.
///
/// Each known placeholder key gets a fresh secret only if some line is
/// exactly `KEY=CHANGE_ME`. A non-empty `llm_key` is always mapped to
/// `LLM_BINDING_API_KEY`, whatever the template holds for it.
pub fn build_replacements(template: &Template, llm_key: Option<&str>) -> ReplacementMap {
    let mut map = ReplacementMap::default();

    for (key, kind) in PLACEHOLDER_KEYS {
        if template.lines().any(|line| is_placeholder_line(line, key)) {
            debug!("Placeholder found for {key}; generating {kind:?} token");
            map.insert(key, Replacement::generated(kind));
        }
    }

    if let Some(value) = llm_key.filter(|value| !value.is_empty()) {
        debug!("Using supplied value for {LLM_BINDING_API_KEY}");
        map.insert(LLM_BINDING_API_KEY, Replacement::supplied(value));
    }

    map
}
