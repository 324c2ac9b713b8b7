//! Macro substitution for token source files.
//!
//! Rewrites quoted token keywords to their numeric codes and verbose
//! property names to one-character abbreviations, then appends the
//! generated `tokenEnum` export to the tokenizer output.
//!
//! The input files are opaque text: substitution is literal find/replace,
//! never parsing.

pub mod emit;
pub mod error;
pub mod lint;
pub mod process;
pub mod substitute;

pub use emit::token_enum_export;
pub use error::FileAccessError;
pub use lint::{lint, TableIssue};
pub use process::process_files;
pub use substitute::substitute;
