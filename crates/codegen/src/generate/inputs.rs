use crate::ast::{Block, BlockKind, Function, Module, Parameter, Property};
use crate::schema::TypeDefinition;

use super::names::{self, Role};

/// Input objects become plain value types: one stored property per input
/// field, a memberwise initializer defaulting nullable fields to `nil`, and
/// a `parameters()` serialization method. Serialization order is non-null
/// fields in declared order first, then nullable fields, each behind a
/// presence check.
pub(super) fn generate(definition: &TypeDefinition, inputs: &mut Module) {
    let mut block = Block::new(BlockKind::Struct, &definition.name).public();
    if let Some(description) = &definition.description {
        block = block.docs(description);
    }
    let root = inputs.push_root(block);

    for field in definition.input_fields() {
        let mut property = Property::stored(
            names::escape(&field.name).into_owned(),
            names::resolve_type(&field.ty, Role::Model),
        )
        .public();
        if let Some(description) = &field.description {
            property = property.docs(description);
        }
        inputs.push(root, property);
    }

    if !definition.input_fields().is_empty() {
        let mut init = Function::initializer(false).public();
        for field in definition.input_fields() {
            let mut parameter = Parameter::new(
                names::escape(&field.name).into_owned(),
                names::resolve_type(&field.ty, Role::Model),
            );
            if field.ty.is_top_level_nullable() {
                parameter = parameter.default_value("nil");
            }
            init = init.parameter(parameter);
        }
        let init_node = inputs.push(root, init);
        for field in definition.input_fields() {
            let name = names::escape(&field.name);
            inputs.line(init_node, format!("self.{name} = {name}"));
        }
    }

    let serialize = inputs.push(root, Function::new("parameters").public().returns("[Parameter]"));
    inputs.line(serialize, "var parameters: [Parameter] = []");
    for field in definition.input_fields() {
        if field.ty.is_top_level_nullable() {
            continue;
        }
        let name = names::escape(&field.name);
        inputs.line(
            serialize,
            format!(
                "parameters.append(Parameter(name: \"{}\", value: {name}))",
                field.name
            ),
        );
    }
    for field in definition.input_fields() {
        if !field.ty.is_top_level_nullable() {
            continue;
        }
        let name = names::escape(&field.name);
        inputs.line(serialize, format!("if let {name} = {name} {{"));
        inputs.line(
            serialize,
            format!(
                "    parameters.append(Parameter(name: \"{}\", value: {name}))",
                field.name
            ),
        );
        inputs.line(serialize, "}");
    }
    inputs.line(serialize, "return parameters");
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use crate::schema::{InputValue, TypeKind, TypeRef};

    use super::*;

    fn int() -> TypeRef {
        TypeRef::named(TypeKind::Scalar, "Int")
    }

    fn input(name: &str, ty: TypeRef) -> InputValue {
        InputValue {
            name: name.to_owned(),
            description: None,
            ty,
        }
    }

    #[test]
    fn non_null_fields_serialize_before_nullable_ones() {
        let definition = TypeDefinition {
            kind: TypeKind::InputObject,
            name: "ReviewInput".to_owned(),
            description: None,
            fields: None,
            input_fields: Some(vec![
                input("a", TypeRef::non_null(int())),
                input("b", int()),
                input("c", TypeRef::non_null(int())),
            ]),
            interfaces: None,
            enum_values: None,
            possible_types: None,
        };

        let mut module = Module::default();
        generate(&definition, &mut module);

        expect![[r#"
            public struct ReviewInput {
                public var a: Int

                public var b: Int!

                public var c: Int

                public init(a: Int, b: Int! = nil, c: Int) {
                    self.a = a
                    self.b = b
                    self.c = c
                }

                public func parameters() -> [Parameter] {
                    var parameters: [Parameter] = []
                    parameters.append(Parameter(name: "a", value: a))
                    parameters.append(Parameter(name: "c", value: c))
                    if let b = b {
                        parameters.append(Parameter(name: "b", value: b))
                    }
                    return parameters
                }
            }
        "#]]
        .assert_eq(&module.render());
    }
}
