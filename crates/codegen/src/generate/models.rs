use crate::ast::{Accessors, Block, BlockKind, Function, Module, Parameter, Property};
use crate::schema::{TypeDefinition, TypeKind};

use super::names::{self, Role};

/// Response models delegate their storage to the runtime's keyed store:
/// every field property reads and writes under its wire name, the
/// JSON-driven initializer copies scalar leaves raw and recursively
/// constructs nested models, and non-collection object fields get an
/// alias accessor so the same field can be requested twice under
/// different names.
pub(super) fn generate_model(definition: &TypeDefinition, models: &mut Module) {
    let is_abstract = matches!(definition.kind, TypeKind::Interface | TypeKind::Union);
    let class_name = if is_abstract {
        names::model_concrete(&definition.name)
    } else {
        names::model(&definition.name)
    };

    let mut block = Block::new(BlockKind::Class, &class_name)
        .public()
        .inherits("GraphModel");
    if let Some(description) = &definition.description {
        block = block.docs(description);
    }
    let root = models.push_root(block);

    // The runtime base compares this against the payload's __typename to
    // reject mismatched payloads.
    models.push(
        root,
        Property::computed("typeName", "String", vec![format!("\"{}\"", definition.name)])
            .public()
            .override_declaration()
            .static_scope(),
    );

    for field in definition.fields() {
        let getter = if field.ty.is_top_level_nullable() {
            "optionalValue"
        } else {
            "value"
        };
        let mut property = Property::with_accessors(
            names::escape(&field.name).into_owned(),
            names::resolve_type(&field.ty, Role::Model),
            Accessors {
                get: vec![format!("{getter}(for: \"{}\")", field.name)],
                set: Some(vec![format!("set(newValue, for: \"{}\")", field.name)]),
                ..Accessors::default()
            },
        )
        .public();
        if let Some(description) = &field.description {
            property = property.docs(description);
        }
        if field.is_deprecated {
            property = property.attribute(deprecation_attribute(
                field.deprecation_reason.as_deref(),
            ));
        }
        models.push(root, property);
    }

    if is_abstract {
        for possible in definition.possible_types() {
            let Some(name) = possible.name.as_deref() else {
                continue;
            };
            // Present only when the payload actually matched this type.
            models.push(
                root,
                Property::with_accessors(
                    format!("as{name}"),
                    format!("{}!", names::model_leaf(possible)),
                    Accessors {
                        get: vec![format!("optionalValue(for: \"as{name}\")")],
                        ..Accessors::default()
                    },
                )
                .public(),
            );
        }
    }

    let init = models.push(
        root,
        Function::initializer(true)
            .public()
            .parameter(Parameter::new("json", "[String: Any]")),
    );
    models.line(init, "super.init(json: json)");
    for field in definition.fields() {
        let wire = &field.name;
        if field.ty.has_scalar() {
            models.line(init, format!("if let value = json[\"{wire}\"] {{"));
            models.line(init, format!("    set(value, for: \"{wire}\")"));
            models.line(init, "}");
        } else if field.ty.is_collection() {
            let model = names::model_leaf(field.ty.leaf());
            models.line(init, format!("if let values = json[\"{wire}\"] as? [[String: Any]] {{"));
            models.line(
                init,
                format!("    set(values.map {{ {model}(json: $0) }}, for: \"{wire}\")"),
            );
            models.line(init, "}");
        } else {
            let model = names::model_leaf(field.ty.leaf());
            models.line(init, format!("if let value = json[\"{wire}\"] as? [String: Any] {{"));
            models.line(init, format!("    set({model}(json: value), for: \"{wire}\")"));
            models.line(init, "}");
        }
    }
    if is_abstract {
        // Each fragment parses the same payload independently; only the
        // matching ones will expose data.
        for possible in definition.possible_types() {
            let Some(name) = possible.name.as_deref() else {
                continue;
            };
            models.line(
                init,
                format!("set({}(json: json), for: \"as{name}\")", names::model_leaf(possible)),
            );
        }
    }

    for field in definition.fields() {
        if field.ty.has_scalar() || field.ty.is_collection() {
            continue;
        }
        let accessor = models.push(
            root,
            Function::new(names::escape(&field.name).into_owned())
                .public()
                .parameter(Parameter::new("alias", "String"))
                .returns(names::resolve_type(&field.ty, Role::Model)),
        );
        models.line(
            accessor,
            format!("aliasedValue(for: \"{}\", alias: alias)", field.name),
        );
    }
}

fn deprecation_attribute(reason: Option<&str>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => {
            format!(
                "@available(*, deprecated, message: \"{}\")",
                names::quote_escape(reason)
            )
        }
        _ => "@available(*, deprecated)".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use crate::schema::{Field, TypeRef};

    use super::*;

    fn field(name: &str, ty: TypeRef) -> Field {
        Field {
            name: name.to_owned(),
            description: None,
            ty,
            args: Vec::new(),
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    fn string() -> TypeRef {
        TypeRef::named(TypeKind::Scalar, "String")
    }

    #[test]
    fn models_copy_scalars_and_construct_nested_models() {
        let definition = TypeDefinition {
            kind: TypeKind::Object,
            name: "Repository".to_owned(),
            description: None,
            fields: Some(vec![
                field("name", TypeRef::non_null(string())),
                field("owner", TypeRef::named(TypeKind::Object, "User")),
                field(
                    "labels",
                    TypeRef::list(TypeRef::non_null(TypeRef::named(TypeKind::Object, "Label"))),
                ),
                Field {
                    is_deprecated: true,
                    deprecation_reason: Some("Use name instead.".to_owned()),
                    ..field("slug", string())
                },
            ]),
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
        };

        let mut module = Module::default();
        generate_model(&definition, &mut module);

        expect![[r#"
            public class Repository: GraphModel {
                public override static var typeName: String { "Repository" }

                public var name: String {
                    get { value(for: "name") }
                    set { set(newValue, for: "name") }
                }

                public var owner: User! {
                    get { optionalValue(for: "owner") }
                    set { set(newValue, for: "owner") }
                }

                public var labels: [Label]! {
                    get { optionalValue(for: "labels") }
                    set { set(newValue, for: "labels") }
                }

                @available(*, deprecated, message: "Use name instead.")
                public var slug: String! {
                    get { optionalValue(for: "slug") }
                    set { set(newValue, for: "slug") }
                }

                public required init(json: [String: Any]) {
                    super.init(json: json)
                    if let value = json["name"] {
                        set(value, for: "name")
                    }
                    if let value = json["owner"] as? [String: Any] {
                        set(User(json: value), for: "owner")
                    }
                    if let values = json["labels"] as? [[String: Any]] {
                        set(values.map { Label(json: $0) }, for: "labels")
                    }
                    if let value = json["slug"] {
                        set(value, for: "slug")
                    }
                }

                public func owner(alias: String) -> User! {
                    aliasedValue(for: "owner", alias: alias)
                }
            }
        "#]]
        .assert_eq(&module.render());
    }

    #[test]
    fn abstract_models_expose_fragment_payloads_with_a_passthrough() {
        let definition = TypeDefinition {
            kind: TypeKind::Interface,
            name: "Actor".to_owned(),
            description: None,
            fields: Some(vec![field("login", TypeRef::non_null(string()))]),
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: Some(vec![
                TypeRef::named(TypeKind::Object, "User"),
                TypeRef::named(TypeKind::Object, "Bot"),
            ]),
        };

        let mut module = Module::default();
        generate_model(&definition, &mut module);

        expect![[r#"
            public class ActorConcrete: GraphModel {
                public override static var typeName: String { "Actor" }

                public var login: String {
                    get { value(for: "login") }
                    set { set(newValue, for: "login") }
                }

                public var asUser: User! {
                    get { optionalValue(for: "asUser") }
                }

                public var asBot: Bot! {
                    get { optionalValue(for: "asBot") }
                }

                public required init(json: [String: Any]) {
                    super.init(json: json)
                    if let value = json["login"] {
                        set(value, for: "login")
                    }
                    set(User(json: json), for: "asUser")
                    set(Bot(json: json), for: "asBot")
                }
            }
        "#]]
        .assert_eq(&module.render());
    }
}
