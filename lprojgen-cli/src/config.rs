//! Settings read from `lprojgen.toml` and merged with command-line flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use lprojgen::{FormatOptions, Substitutions};
use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lprojgen.toml";

/// `exclude = "regex"`, or `exclude = false` to keep every term.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExcludeSetting {
    Pattern(String),
    Enabled(bool),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub language: Option<String>,
    pub print_date: Option<bool>,
    pub exclude: Option<ExcludeSetting>,
    pub source: Option<String>,
    #[serde(default)]
    pub substitutions: Substitutions,
}

impl FileConfig {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }
}

/// Reads the config file at `path`, or the default file when it exists.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, String> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(FileConfig::default());
            }
            default
        }
    };
    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), "loaded config file");
    FileConfig::from_toml(&content)
}

/// Values given on the command line. They take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub print_date: bool,
    pub exclude: Option<String>,
    pub no_exclude: bool,
    pub source: Option<String>,
    /// `KEY=VALUE` pairs.
    pub substitutions: Vec<String>,
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub language: Option<String>,
    pub options: FormatOptions,
}

pub fn resolve(config: FileConfig, overrides: Overrides) -> Result<Resolved, String> {
    let exclude = if overrides.no_exclude {
        None
    } else if let Some(pattern) = overrides.exclude {
        Some(pattern)
    } else {
        match config.exclude {
            Some(ExcludeSetting::Pattern(pattern)) => Some(pattern),
            Some(ExcludeSetting::Enabled(false)) => None,
            Some(ExcludeSetting::Enabled(true)) | None => {
                Some(lprojgen::DEFAULT_EXCLUDE_PATTERN.to_string())
            }
        }
    };

    let mut substitutions = config.substitutions;
    for pair in &overrides.substitutions {
        let (token, replacement) = parse_substitution(pair)?;
        substitutions.insert(token.to_string(), replacement.to_string());
    }

    let mut options = FormatOptions::default()
        .with_exclude_pattern(exclude.as_deref())
        .map_err(|e| e.to_string())?
        .with_substitutions(substitutions)
        .with_print_date(overrides.print_date || config.print_date.unwrap_or(false));
    if let Some(source) = overrides.source.or(config.source) {
        options = options.with_source(source);
    }

    Ok(Resolved {
        language: overrides.language.or(config.language),
        options,
    })
}

fn parse_substitution(pair: &str) -> Result<(&str, &str), String> {
    match pair.split_once('=') {
        Some((token, replacement)) if !token.is_empty() => Ok((token, replacement)),
        _ => Err(format!(
            "Invalid substitution '{}': expected KEY=VALUE",
            pair
        )),
    }
}
