//! Generation of Apple `.strings` files.
//!
//! Each term lands in the file named by its `context`, with the `en.lproj` directory
//! swapped for the target language. Plural definitions contribute their singular form.

use std::{collections::HashMap, io::Write, path::Path};

use crate::{
    error::Error,
    header,
    options::FormatOptions,
    stats::{RunStats, StatsCollector},
    traits::Document,
    transform::{Target, transform},
    types::TermRecord,
};

/// Directory segment replaced by the target language in each record's context.
pub const LANGUAGE_PLACEHOLDER: &str = "en.lproj";

/// Maps a record's context onto the directory of `language`.
///
/// `en.lproj/Localizable.strings` becomes `fr.lproj/Localizable.strings` for `fr`.
pub fn resolve_path(context: &str, language: &str) -> String {
    context.replace(LANGUAGE_PLACEHOLDER, &format!("{language}.lproj"))
}

/// The lines of one generated `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsFile {
    /// Destination, relative to the output root.
    pub path: String,
    pub lines: Vec<String>,
}

impl Document for StringsFile {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = self.lines.join("\n");
        content.push('\n');
        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }
}

/// All `.strings` files produced by one run, in the order their paths were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringsDocument {
    files: Vec<StringsFile>,
}

impl StringsDocument {
    pub fn get(&self, path: &str) -> Option<&StringsFile> {
        self.files.iter().find(|file| file.path == path)
    }

    pub fn files(&self) -> &[StringsFile] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Writes every file below `root`, creating directories as needed.
    pub fn write_all<P: AsRef<Path>>(&self, root: P) -> Result<(), Error> {
        let root = root.as_ref();
        for file in &self.files {
            let destination = root.join(&file.path);
            tracing::debug!(path = %destination.display(), lines = file.lines.len(), "writing strings file");
            file.write_to(destination)?;
        }
        Ok(())
    }
}

impl IntoIterator for StringsDocument {
    type Item = StringsFile;
    type IntoIter = std::vec::IntoIter<StringsFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

/// Accumulates lines per destination path.
struct Buffers {
    header: Vec<String>,
    index: HashMap<String, usize>,
    files: Vec<StringsFile>,
}

impl Buffers {
    fn new(header: Vec<String>) -> Self {
        Buffers {
            header,
            index: HashMap::new(),
            files: Vec::new(),
        }
    }

    /// The line buffer of `path`, seeded with the header on first use.
    fn lines_for(&mut self, path: String) -> &mut Vec<String> {
        let position = match self.index.get(&path) {
            Some(&position) => position,
            None => {
                self.index.insert(path.clone(), self.files.len());
                self.files.push(StringsFile {
                    path,
                    lines: self.header.clone(),
                });
                self.files.len() - 1
            }
        };
        &mut self.files[position].lines
    }

    fn into_document(self) -> StringsDocument {
        StringsDocument { files: self.files }
    }
}

pub struct StringsFormatter;

impl StringsFormatter {
    /// Renders `records` as `.strings` files for `language`.
    ///
    /// Records missing a term or definition are reported as invalid; terms matching the
    /// exclusion pattern are counted as excluded. Neither produces output.
    pub fn write(
        records: &[TermRecord],
        language: &str,
        options: &FormatOptions,
    ) -> (StringsDocument, RunStats) {
        let mut stats = StatsCollector::new();
        let mut buffers = Buffers::new(header::build(options.print_date));

        for record in records {
            if record.is_incomplete() {
                stats.record_invalid(&record.term);
                continue;
            }
            if options.is_excluded(&record.term) {
                tracing::debug!(term = %record.term, "excluding term");
                stats.record_excluded();
                continue;
            }
            let Some(text) = record
                .definition
                .as_ref()
                .and_then(|definition| definition.singular_text())
            else {
                stats.record_invalid(&record.term);
                continue;
            };
            let value = transform(text, &options.substitutions, Target::Strings);

            let lines = buffers.lines_for(resolve_path(&record.context, language));
            if !record.comment.is_empty() {
                lines.push(format_comment(&record.comment));
            }
            lines.push(format!("\"{}\" = \"{}\";", record.term, value));
            lines.push(String::new());
            stats.record_processed();
        }

        (buffers.into_document(), stats.finish())
    }
}

/// A `/* ... */` line holding `comment` on a single line.
fn format_comment(comment: &str) -> String {
    let comment = comment
        .replace('\r', r"\r")
        .replace('\n', r"\n")
        .replace("*/", "* /");
    format!("/* {comment} */")
}
