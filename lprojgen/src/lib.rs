#![forbid(unsafe_code)]
//! Generation of Apple localization files from translation term exports.
//!
//! Term records, as listed by the translation service, are turned into `.strings` files
//! (one per destination `.lproj` directory) and `.stringsdict` plural rule files.
//! Generation is best effort: incomplete records are skipped and reported in
//! [`RunStats`] rather than failing the run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lprojgen::{FormatOptions, StringsDictFormatter, StringsFormatter};
//!
//! let records = lprojgen::source::load_records("terms.json")?;
//! let options = FormatOptions::default();
//!
//! let (document, stats) = StringsFormatter::write(&records, "fr", &options);
//! document.write_all("Resources")?;
//! stats.log();
//!
//! let stats = StringsDictFormatter::write(
//!     &records,
//!     "Resources/fr.lproj/Localizable.stringsdict",
//!     &options,
//! )?;
//! stats.log();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod formats;
pub mod header;
pub mod options;
pub mod source;
pub mod stats;
pub mod traits;
pub mod transform;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::{
        StringsDictDocument, StringsDictFormatter, StringsDocument, StringsFile, StringsFormatter,
    },
    options::{DEFAULT_EXCLUDE_PATTERN, FormatOptions},
    stats::{RunStats, StatsCollector},
    transform::{Target, transform},
    types::{Definition, PluralForms, Substitutions, TermRecord},
};
