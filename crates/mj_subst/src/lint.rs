//! Development-time validation of the substitution tables.
//!
//! The processing driver never runs these checks; malformed tables are a
//! programming error, not a runtime condition. The `check` subcommand
//! surfaces them while editing the tables.

use std::collections::HashSet;
use std::fmt;

use mj_tables::MacroConfig;

use crate::substitute::rules::{keyword_rules, property_rules};

/// A problem found in the configured tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    /// The same keyword appears twice; only the first position can win.
    DuplicateKeyword(String),
    /// The same long property name appears twice.
    DuplicateProperty(String),
    /// Two long names abbreviate to the same short code.
    DuplicateShortCode(String),
    /// An earlier rule's pattern occurs inside a later rule's pattern, so
    /// the earlier rule rewrites the later rule's match sites first.
    OverlappingRules { earlier: String, later: String },
}

impl TableIssue {
    /// Duplicates make the tables ambiguous; overlaps are the documented
    /// outcome of sequential substitution and only warn.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, TableIssue::OverlappingRules { .. })
    }
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::DuplicateKeyword(kw) => write!(f, "duplicate keyword {kw:?}"),
            TableIssue::DuplicateProperty(name) => write!(f, "duplicate property {name:?}"),
            TableIssue::DuplicateShortCode(code) => {
                write!(f, "short code {code:?} is assigned twice")
            }
            TableIssue::OverlappingRules { earlier, later } => {
                write!(f, "pattern {earlier:?} rewrites inside later pattern {later:?}")
            }
        }
    }
}

/// Check the tables and their expanded rule lists for duplicates and
/// ordering hazards.
pub fn lint(config: &MacroConfig) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    let mut keywords = HashSet::new();
    for (_, keyword) in config.keywords.codes() {
        if !keywords.insert(keyword) {
            issues.push(TableIssue::DuplicateKeyword(keyword.to_string()));
        }
    }

    let mut longs = HashSet::new();
    let mut shorts = HashSet::new();
    for (long, short) in config.properties.pairs() {
        if !longs.insert(long) {
            issues.push(TableIssue::DuplicateProperty(long.to_string()));
        }
        if !shorts.insert(short) {
            issues.push(TableIssue::DuplicateShortCode(short.to_string()));
        }
    }

    let mut rules = keyword_rules(&config.keywords);
    rules.extend(property_rules(&config.properties));
    for (i, earlier) in rules.iter().enumerate() {
        for later in &rules[i + 1..] {
            if later.pattern.contains(&earlier.pattern) {
                issues.push(TableIssue::OverlappingRules {
                    earlier: earlier.pattern.clone(),
                    later: later.pattern.clone(),
                });
            }
        }
    }

    issues
}
