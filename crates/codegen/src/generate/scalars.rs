use crate::ast::{Module, TypeAlias};
use crate::schema::TypeDefinition;

use super::names::STANDARD_SCALARS;
use super::GeneratorOptions;

/// Custom scalars become typealiases onto their transport representation;
/// the standard set is already a target-language type and produces nothing.
pub(super) fn generate(
    definition: &TypeDefinition,
    options: &GeneratorOptions,
    scalars: &mut Module,
) {
    if STANDARD_SCALARS.contains(&definition.name.as_str()) {
        return;
    }

    let representation = options
        .scalar_overrides
        .get(&definition.name)
        .map(String::as_str)
        .unwrap_or("String");

    let mut alias = TypeAlias::new(&definition.name, representation).public();
    if let Some(description) = &definition.description {
        alias = alias.docs(description);
    }
    scalars.push_root(alias);
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use crate::schema::TypeKind;

    use super::*;

    fn scalar(name: &str) -> TypeDefinition {
        TypeDefinition {
            kind: TypeKind::Scalar,
            name: name.to_owned(),
            description: None,
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
        }
    }

    #[test]
    fn standard_scalars_produce_nothing() {
        let mut module = Module::default();
        let options = GeneratorOptions::default();
        for name in ["Int", "Boolean", "Float", "String", "URL"] {
            generate(&scalar(name), &options, &mut module);
        }
        assert!(module.is_empty());
    }

    #[test]
    fn custom_scalars_alias_their_representation() {
        let mut module = Module::default();
        let mut options = GeneratorOptions::default();
        options
            .scalar_overrides
            .insert("Timestamp".to_owned(), "Double".to_owned());

        generate(&scalar("DateTime"), &options, &mut module);
        generate(&scalar("Timestamp"), &options, &mut module);

        expect![[r#"
            public typealias DateTime = String

            public typealias Timestamp = Double
        "#]]
        .assert_eq(&module.render());
    }
}
