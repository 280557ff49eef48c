//! Text normalization shared by the `.strings` and `.stringsdict` writers.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Substitutions;

lazy_static! {
    /// `%s` and positional `%1$s` string specifiers.
    static ref STRING_SPECIFIER_REGEX: Regex = Regex::new(r"%(\d+\$)?s").unwrap();
}

/// U+2028, left behind by the translation service's exporter.
const LINE_SEPARATOR: char = '\u{2028}';

/// The file format a text is being prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Quoted values in a `.strings` file: line breaks, carriage returns and quotes are
    /// escaped.
    Strings,
    /// `<string>` values in a `.stringsdict` plist: the XML writer does the escaping, so
    /// `\n` sequences become real line breaks.
    StringsDict,
}

/// Normalizes a translation for the given target format.
///
/// Substitutions run first, in order, as literal replacements. Then U+2028 is removed,
/// line breaks are converted for the target, quotes are escaped (`.strings` only), and
/// `%s`/`%N$s` become `%@`/`%N$@`.
///
/// The two newline conversions are inverses only for text that uses a single
/// representation; mixing real line breaks and `\n` in one value is not normalized.
pub fn transform(text: &str, substitutions: &Substitutions, target: Target) -> String {
    let mut text = text.to_string();
    for (token, replacement) in substitutions.iter() {
        if !token.is_empty() {
            text = text.replace(token, replacement);
        }
    }

    text.retain(|c| c != LINE_SEPARATOR);

    let text = match target {
        Target::Strings => text
            .replace('\r', r"\r")
            .replace('\n', r"\n")
            .replace('"', r#"\""#),
        Target::StringsDict => text.replace(r"\n", "\n"),
    };

    convert_specifiers(&text).into_owned()
}

/// Rewrites C string specifiers into their Objective-C object form.
pub fn convert_specifiers(text: &str) -> Cow<'_, str> {
    STRING_SPECIFIER_REGEX.replace_all(text, "%${1}@")
}
