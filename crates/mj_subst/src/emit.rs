//! Generated `tokenEnum` export.

use mj_tables::KeywordTable;

/// Build the enumeration line appended to the tokenizer output.
///
/// Keywords stay in their quoted form, comma-joined with no spaces. The
/// line begins with the separating newline and carries no trailing one.
pub fn token_enum_export(keywords: &KeywordTable) -> String {
    let quoted: Vec<String> = keywords
        .codes()
        .map(|(_, kw)| KeywordTable::quoted(kw))
        .collect();
    format!("\nexport const tokenEnum = [{}]", quoted.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_keyword_export() {
        let table = KeywordTable::new(["comma", "function"]);
        assert_eq!(
            token_enum_export(&table),
            "\nexport const tokenEnum = [\"comma\",\"function\"]"
        );
    }

    #[test]
    fn default_table_keeps_quoted_forms() {
        let line = token_enum_export(&KeywordTable::default());
        assert!(line.starts_with("\nexport const tokenEnum = [\"comma\",\"function\","));
        assert!(line.ends_with("\"paren\",\"string\"]"));
        assert!(!line.ends_with("\n"));
    }
}
