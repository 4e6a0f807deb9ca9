use crate::ast::{Block, BlockKind, EnumCase, Module};
use crate::schema::TypeDefinition;

use super::names;

/// Enums become raw-value string enums: the case identifier is the
/// camel-cased wire name, the raw value preserves the wire string exactly
/// so serialization round-trips.
pub(super) fn generate(definition: &TypeDefinition, enums: &mut Module) {
    let mut block = Block::new(BlockKind::Enum, &definition.name)
        .public()
        .inherits("String");
    if let Some(description) = &definition.description {
        block = block.docs(description);
    }
    let root = enums.push_root(block);

    for value in definition.enum_values() {
        let Some(case_name) = names::snake_to_camel(&value.name) else {
            continue;
        };
        let mut case = EnumCase::new(names::escape(&case_name).into_owned(), &value.name);
        if value.is_deprecated {
            if let Some(description) = &value.description {
                case = case.docs(description);
            }
        }
        enums.push(root, case);
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use crate::schema::{EnumValue, TypeKind};

    use super::*;

    fn value(name: &str) -> EnumValue {
        EnumValue {
            name: name.to_owned(),
            description: None,
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    #[test]
    fn cases_are_camel_cased_and_keep_their_wire_value() {
        let definition = TypeDefinition {
            kind: TypeKind::Enum,
            name: "IssueState".to_owned(),
            description: Some("State of an issue.".to_owned()),
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: Some(vec![
                value("OPEN"),
                value("CLOSED_AS_COMPLETED"),
                EnumValue {
                    description: Some("No longer returned by the API.".to_owned()),
                    is_deprecated: true,
                    ..value("ARCHIVED")
                },
            ]),
            possible_types: None,
        };

        let mut module = Module::default();
        generate(&definition, &mut module);

        expect![[r#"
            /// State of an issue.
            public enum IssueState: String {
                case open = "OPEN"

                case closedAsCompleted = "CLOSED_AS_COMPLETED"

                /// No longer returned by the API.
                case archived = "ARCHIVED"
            }
        "#]]
        .assert_eq(&module.render());
    }
}
