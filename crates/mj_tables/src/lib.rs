//! Substitution tables and run configuration for the macrojs preprocessor.
//!
//! Order matters in both tables: a keyword's position in [`KeywordTable`]
//! is the numeric code it is rewritten to, and [`PropertyTable`] pairs are
//! applied strictly in sequence, so a later pair operates on text already
//! modified by earlier ones.

use serde::{Deserialize, Serialize};

/// Ordered token keywords. A keyword's 0-based position is its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable(Vec<String>);

impl KeywordTable {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keywords.into_iter().map(Into::into).collect())
    }

    /// Keywords paired with their numeric codes, in table order.
    pub fn codes(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().enumerate().map(|(i, kw)| (i, kw.as_str()))
    }

    /// The quoted literal form a keyword takes in source text.
    pub fn quoted(keyword: &str) -> String {
        format!("\"{keyword}\"")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new([
            "comma",
            "function",
            "function_token",
            "variable",
            "node",
            "number",
            "operator",
            "operator_token",
            "property_access",
            "paren",
            "string",
        ])
    }
}

/// Ordered property abbreviations: long name to one-character short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyTable(Vec<(String, String)>);

impl PropertyTable {
    pub fn new<I, L, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(long, short)| (long.into(), short.into()))
                .collect(),
        )
    }

    /// (long, short) pairs in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, s)| (l.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::new([
            ("type", "t"),
            ("index", "i"),
            ("endIndex", "e"),
            ("value", "v"),
            ("contents", "C"),
            ("children", "c"),
            ("paren", "p"),
            ("parenInfo", "a"),
            ("name", "n"),
            ("verticalBar", "V"),
            ("implicit", "I"),
            ("opening", "g"),
            ("op", "k"),
            ("parenType", "P"),
            ("prop", "r"),
            ("pID", "d"),
            ("src", "s"),
            ("quote", "q"),
        ])
    }
}

/// Full configuration for one preprocessor run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroConfig {
    /// Whether the substitution passes run at all; with `false` every
    /// source file is copied through unchanged.
    pub replace: bool,
    pub keywords: KeywordTable,
    pub properties: PropertyTable,
    /// Base names processed in order: `<base>.source.js` in, `<base>.js` out.
    /// The generated token enum is appended to the first base's output.
    pub files: Vec<String>,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            replace: false,
            keywords: KeywordTable::default(),
            properties: PropertyTable::default(),
            files: vec![
                "expression_tokenizer".to_string(),
                "parse_string".to_string(),
            ],
        }
    }
}
