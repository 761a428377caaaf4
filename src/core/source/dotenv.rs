//! Dotenv file source.
//!
//! Parses `.env` files the way deploy scripts expect: `KEY=value` lines,
//! comments, blank lines, an optional `export ` prefix, and quoted values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use super::Source;
use crate::core::domain::EnvVar;
use crate::error::ConfigError;

/// Variables loaded from a `.env` file
#[derive(Clone)]
pub struct Dotenv {
    vars: BTreeMap<String, Zeroizing<String>>,
    path: PathBuf,
}

impl Dotenv {
    /// Load and parse a dotenv file.
    ///
    /// When a key appears twice, the later line wins.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading env file");

        let contents = Zeroizing::new(std::fs::read_to_string(path).map_err(|source| {
            ConfigError::EnvFile {
                path: path.display().to_string(),
                source,
            }
        })?);

        let dotenv = Self::parse(&contents, path);
        debug!(vars = dotenv.vars.len(), "env file loaded");

        Ok(dotenv)
    }

    /// Load a dotenv file if it exists, otherwise an empty source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` if the file exists but cannot be read.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no env file");
            Ok(Self {
                vars: BTreeMap::new(),
                path: path.to_path_buf(),
            })
        }
    }

    /// Parse dotenv content
    pub fn parse(contents: &str, path: impl AsRef<Path>) -> Self {
        let mut vars = BTreeMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                let value = parse_value(value.trim());
                vars.insert(key.to_string(), Zeroizing::new(value));
            }
        }

        Self {
            vars,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Source for Dotenv {
    fn get(&self, name: &str) -> EnvVar {
        match self.vars.get(name) {
            Some(value) => EnvVar::set(name, value.as_str()),
            None => EnvVar::unset(name),
        }
    }
}

impl std::fmt::Debug for Dotenv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dotenv")
            .field("path", &self.path)
            .field("vars", &self.vars.len())
            .finish()
    }
}

fn parse_value(raw: &str) -> String {
    if let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') {
        if let Some(value) = parse_quoted(&raw[1..], quote) {
            return value;
        }
    }

    // Unquoted values end at an inline comment
    match raw.find(" #") {
        Some(idx) => raw[..idx].trim_end().to_string(),
        None => raw.to_string(),
    }
}

/// Body of a quoted value, up to the matching close quote.
///
/// Only whitespace or a `#` comment may follow the close quote; anything
/// else, or a missing close quote, returns `None` and the value is read
/// unquoted. Escapes are honored inside double quotes only.
fn parse_quoted(body: &str, quote: char) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();

    while let Some((idx, ch)) = chars.next() {
        if ch == quote {
            let rest = body[idx + ch.len_utf8()..].trim_start();
            return (rest.is_empty() || rest.starts_with('#')).then_some(out);
        }

        if ch != '\\' || quote != '"' {
            out.push(ch);
            continue;
        }

        match chars.next().map(|(_, escaped)| escaped) {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(escaped @ ('"' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    None
}
