//! Rendering generated documents to writers and files.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// A generated localization file.
///
/// # Example
///
/// ```rust,no_run
/// use lprojgen::{FormatOptions, StringsDictFormatter, TermRecord, traits::Document};
/// let records: Vec<TermRecord> = lprojgen::source::load_records("terms.json")?;
/// let (document, _stats) = StringsDictFormatter::render(&records, &FormatOptions::default())?;
/// document.write_to("fr.lproj/Localizable.stringsdict")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Document {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to a file path, creating missing parent directories.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }

    /// Render into a string.
    fn to_string_lossy(&self) -> Result<String, Error> {
        let mut out = Vec::new();
        self.to_writer(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
