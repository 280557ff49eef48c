//! All error types for the lprojgen crate.
//!
//! Individual term records never produce an error: incomplete or filtered records are
//! classified and reported through [`RunStats`](crate::stats::RunStats). Errors only come
//! from reading the term export, compiling a user-supplied pattern, or writing the output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid exclude pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid term records: {0}")]
    InvalidRecords(String),
}
