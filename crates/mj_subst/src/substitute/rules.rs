//! Expansion of the substitution tables into ordered literal rules.
//!
//! Each rule is plain substring replacement. The passes apply the rules
//! strictly in list order, so a rule whose pattern occurs inside a later
//! rule's pattern rewrites those sites first; `lint` reports where the
//! configured tables do that.

use mj_tables::{KeywordTable, PropertyTable};

/// One literal text-replacement rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }
}

/// Keyword rules in table order: `"keyword"` to its decimal code.
///
/// Replacements are digits, never quoted strings, so no keyword rule can
/// produce another rule's pattern.
pub(crate) fn keyword_rules(keywords: &KeywordTable) -> Vec<Rule> {
    keywords
        .codes()
        .map(|(code, kw)| Rule::new(KeywordTable::quoted(kw), code.to_string()))
        .collect()
}

/// Property rules in table order: `long:` to `short:`, then `.long` to `.short`.
pub(crate) fn property_rules(properties: &PropertyTable) -> Vec<Rule> {
    let mut rules = Vec::with_capacity(properties.len() * 2);
    for (long, short) in properties.pairs() {
        rules.push(Rule::new(format!("{long}:"), format!("{short}:")));
        rules.push(Rule::new(format!(".{long}"), format!(".{short}")));
    }
    rules
}
