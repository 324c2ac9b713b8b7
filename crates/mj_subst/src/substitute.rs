//! Text-level substitution over token source files.
//!
//! Processing order:
//! 1. Keywords — quoted token literals become their numeric codes
//! 2. Properties — `long:` / `.long` become their short forms
//!
//! Both passes are literal substring replacement over the whole text,
//! deliberately not token-aware: a quoted keyword inside an unrelated
//! string or comment is rewritten like any other occurrence.

use mj_tables::{KeywordTable, PropertyTable};

mod keyword_pass;
mod property_pass;
pub(crate) mod rules;

/// Substitute keyword and property macros in a source string.
pub fn substitute(source: &str, keywords: &KeywordTable, properties: &PropertyTable) -> String {
    let result = keyword_pass::rewrite_keywords(source, keywords);
    property_pass::rewrite_properties(&result, properties)
}
