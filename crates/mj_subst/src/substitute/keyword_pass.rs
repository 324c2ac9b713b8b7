//! Keyword pass: quoted token literals become their numeric codes.

use mj_tables::KeywordTable;

use super::rules::keyword_rules;

/// Replace every occurrence of each quoted keyword with the decimal form
/// of its table position.
///
/// Quoted forms are all distinct and never substrings of one another, so
/// rule order cannot change the result of this pass.
pub(super) fn rewrite_keywords(source: &str, keywords: &KeywordTable) -> String {
    let mut result = source.to_string();
    for rule in keyword_rules(keywords) {
        result = rule.apply(&result);
    }
    result
}
