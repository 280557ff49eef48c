//! Settings shared by both formatters.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, types::Substitutions};

/// Terms meant for the Android app only.
pub const DEFAULT_EXCLUDE_PATTERN: &str = "(^android_|_android$)";

lazy_static! {
    static ref DEFAULT_EXCLUDE_REGEX: Regex = Regex::new(DEFAULT_EXCLUDE_PATTERN).unwrap();
}

/// How term records are filtered and rendered.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Literal replacements applied to every definition before escaping.
    pub substitutions: Substitutions,
    /// Stamp generated files with the current date.
    pub print_date: bool,
    /// Terms matching this pattern are left out. `None` keeps every term.
    pub exclude: Option<Regex>,
    /// Where the terms were exported from, mentioned in `.stringsdict` banners.
    pub source: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            substitutions: Substitutions::new(),
            print_date: false,
            exclude: Some(DEFAULT_EXCLUDE_REGEX.clone()),
            source: None,
        }
    }
}

impl FormatOptions {
    /// Options that keep every term and apply no substitution.
    pub fn unfiltered() -> Self {
        FormatOptions {
            exclude: None,
            ..Default::default()
        }
    }

    pub fn with_exclude_pattern(mut self, pattern: Option<&str>) -> Result<Self, Error> {
        self.exclude = pattern.map(Regex::new).transpose()?;
        Ok(self)
    }

    pub fn with_substitutions(mut self, substitutions: Substitutions) -> Self {
        self.substitutions = substitutions;
        self
    }

    pub fn with_print_date(mut self, print_date: bool) -> Self {
        self.print_date = print_date;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_excluded(&self, term: &str) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(term))
    }
}
