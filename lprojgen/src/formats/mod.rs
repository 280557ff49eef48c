pub mod strings;
pub mod stringsdict;

// Reexporting the formats for easier access
pub use strings::{StringsDocument, StringsFile, StringsFormatter};
pub use stringsdict::{StringsDictDocument, StringsDictFormatter};

