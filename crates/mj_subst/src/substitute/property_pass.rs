//! Property pass: verbose property names become one-character codes.

use mj_tables::PropertyTable;

use super::rules::property_rules;

/// Rewrite `long:` and `.long` occurrences pair by pair, in table order.
///
/// Later pairs operate on text already modified by earlier ones, so a
/// pattern occurring inside a later pattern claims those sites first
/// (`.paren` takes the head of `.parenInfo` before the `parenInfo` pair
/// runs). The shipped table accepts this; `lint` reports where it happens.
pub(super) fn rewrite_properties(source: &str, properties: &PropertyTable) -> String {
    let mut result = source.to_string();
    for rule in property_rules(properties) {
        result = rule.apply(&result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_and_access_forms() {
        let table = PropertyTable::default();
        let output = rewrite_properties("({ value: 1, endIndex: 2 }).value", &table);
        assert_eq!(output, "({ v: 1, e: 2 }).v");
    }

    #[test]
    fn definition_form_requires_the_colon() {
        let table = PropertyTable::default();
        assert_eq!(rewrite_properties("typeof x", &table), "typeof x");
    }

    #[test]
    fn earlier_pair_claims_prefix_of_later_pattern() {
        let table = PropertyTable::default();
        let output = rewrite_properties("node.parenInfo.children", &table);
        assert_eq!(output, "node.pInfo.c");
    }

    #[test]
    fn op_pair_claims_the_tail_of_prop_definitions() {
        let table = PropertyTable::default();
        assert_eq!(rewrite_properties("{ prop: x }", &table), "{ prk: x }");
    }

    #[test]
    fn pairs_apply_in_sequence_on_modified_text() {
        let table = PropertyTable::new([("op", "k"), ("opening", "g")]);
        let output = rewrite_properties("state.opening", &table);
        assert_eq!(output, "state.kening");
    }
}
