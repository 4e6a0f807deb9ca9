use crate::ast::{Accessors, Block, BlockKind, Function, Module, NodeId, Parameter, Property};
use crate::schema::{Field, SchemaIndex, TypeDefinition, TypeKind, TypeRef};

use super::names::{self, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberForm {
    /// Protocol requirement: bare signatures, no bodies, no parameter
    /// defaults, `Self` as the builder type.
    Requirement,
    /// Full implementation on a concrete builder class or extension.
    Implementation,
}

/// One query-builder class per object type. Scalar fields without arguments
/// are chainable read-only properties; everything else is a
/// `@discardableResult` method that attaches a child node and, for fields
/// needing a sub-selection, hands a freshly created child builder to the
/// caller's `buildOn` callback.
pub(super) fn generate_object(definition: &TypeDefinition, queries: &mut Module) {
    let class_name = names::query_builder(&definition.name);
    let mut block = Block::new(BlockKind::Class, &class_name)
        .public()
        .inherits("GraphQuery");
    for interface in definition.interfaces() {
        if let Some(name) = interface.name.as_deref() {
            block = block.inherits(names::query_builder(name));
        }
    }
    if let Some(description) = &definition.description {
        block = block.docs(description);
    }
    let root = queries.push_root(block);

    for field in definition.fields() {
        push_field_member(queries, root, field, &class_name, MemberForm::Implementation);
    }
}

/// Interfaces and unions expose a protocol contract plus a concrete proxy
/// builder. The proxy carries the full field implementation and one
/// `on<X>(buildOn:)` inline-fragment method per possible type; unions add
/// empty conformance extensions on their members.
pub(super) fn generate_abstract(
    definition: &TypeDefinition,
    index: &SchemaIndex<'_>,
    queries: &mut Module,
) {
    let protocol_name = names::query_builder(&definition.name);

    let mut protocol = Block::new(BlockKind::Protocol, &protocol_name).public();
    if let Some(description) = &definition.description {
        protocol = protocol.docs(description);
    }
    let protocol_root = queries.push_root(protocol);
    for field in definition.fields() {
        push_field_member(queries, protocol_root, field, "Self", MemberForm::Requirement);
    }

    if definition.kind == TypeKind::Interface {
        push_default_arity_extensions(definition, index, queries);
    }

    let concrete_name = names::query_concrete(&definition.name);
    let proxy = queries.push_root(
        Block::new(BlockKind::Class, &concrete_name)
            .public()
            .inherits("GraphQuery")
            .inherits(&protocol_name),
    );
    for field in definition.fields() {
        push_field_member(queries, proxy, field, &concrete_name, MemberForm::Implementation);
    }
    for possible in definition.possible_types() {
        push_fragment_method(queries, proxy, possible, &concrete_name);
    }

    if definition.kind == TypeKind::Union {
        for possible in definition.possible_types() {
            let Some(name) = possible.name.as_deref() else {
                continue;
            };
            if index.get(name).is_none() {
                tracing::debug!(
                    union = %definition.name,
                    possible = name,
                    "possible type missing from index, skipping conformance"
                );
                continue;
            }
            queries.push_root(
                Block::new(BlockKind::Extension, names::query_builder(name))
                    .inherits(&protocol_name),
            );
        }
    }
}

/// Implementers whose same-named field takes a different argument count
/// cannot satisfy the interface contract with their own method; an
/// extension supplies the interface-arity version so callers holding only
/// the protocol type still reach the field.
fn push_default_arity_extensions(
    definition: &TypeDefinition,
    index: &SchemaIndex<'_>,
    queries: &mut Module,
) {
    for possible in definition.possible_types() {
        let Some(name) = possible.name.as_deref() else {
            continue;
        };
        let Some(implementer) = index.get(name) else {
            tracing::debug!(
                interface = %definition.name,
                possible = name,
                "possible type missing from index, skipping augmentation"
            );
            continue;
        };

        let mismatched: Vec<&Field> = definition
            .fields()
            .iter()
            .filter(|field| {
                implementer.fields().iter().any(|candidate| {
                    candidate.name == field.name && candidate.args.len() != field.args.len()
                })
            })
            .collect();
        if mismatched.is_empty() {
            continue;
        }

        let target = names::query_builder(&implementer.name);
        let extension = queries.push_root(Block::new(BlockKind::Extension, &target));
        for field in mismatched {
            push_field_member(queries, extension, field, &target, MemberForm::Implementation);
        }
    }
}

fn push_field_member(
    module: &mut Module,
    parent: NodeId,
    field: &Field,
    self_type: &str,
    form: MemberForm,
) {
    if field.args.is_empty() && field.ty.has_scalar() {
        push_field_property(module, parent, field, self_type, form);
    } else {
        push_field_method(module, parent, field, self_type, form);
    }
}

fn push_field_property(
    module: &mut Module,
    parent: NodeId,
    field: &Field,
    self_type: &str,
    form: MemberForm,
) {
    let name = names::escape(&field.name).into_owned();
    let mut property = match form {
        MemberForm::Requirement => Property::with_accessors(name, self_type, Accessors::default()),
        MemberForm::Implementation => Property::computed(
            name,
            self_type,
            vec![
                format!(
                    "addChild(GraphQuery(name: \"{}\", parameters: []))",
                    field.name
                ),
                "return self".to_owned(),
            ],
        )
        .public(),
    };
    if let Some(description) = &field.description {
        property = property.docs(description);
    }
    module.push(parent, property);
}

fn push_field_method(
    module: &mut Module,
    parent: NodeId,
    field: &Field,
    self_type: &str,
    form: MemberForm,
) {
    let mut function = Function::new(names::escape(&field.name).into_owned())
        .attribute("@discardableResult")
        .returns(self_type);
    if form == MemberForm::Implementation {
        function = function.public();
    }
    if let Some(description) = &field.description {
        function = function.docs(description);
    }

    for arg in &field.args {
        let mut parameter = Parameter::new(
            names::escape(&arg.name).into_owned(),
            names::resolve_type(&arg.ty, Role::Query),
        );
        if form == MemberForm::Implementation && arg.ty.is_top_level_nullable() {
            parameter = parameter.default_value("nil");
        }
        function = function.parameter(parameter);
    }

    let builds_subselection = !field.ty.has_scalar();
    let child_builder = builds_subselection.then(|| names::child_builder(field.ty.leaf()));
    if let Some(child_builder) = &child_builder {
        function = function.parameter(Parameter::new(
            "buildOn",
            format!("({child_builder}) -> Void"),
        ));
    }

    let node = module.push(parent, function);
    if form == MemberForm::Requirement {
        return;
    }

    let constructor = child_builder.unwrap_or_else(|| "GraphQuery".to_owned());
    if field.args.is_empty() {
        module.line(
            node,
            format!("let child = {constructor}(name: \"{}\", parameters: [])", field.name),
        );
    } else {
        module.line(node, "var parameters: [Parameter] = []");
        for arg in &field.args {
            if arg.ty.is_top_level_nullable() {
                continue;
            }
            let name = names::escape(&arg.name);
            module.line(
                node,
                format!(
                    "parameters.append(Parameter(name: \"{}\", value: {name}))",
                    arg.name
                ),
            );
        }
        for arg in &field.args {
            if !arg.ty.is_top_level_nullable() {
                continue;
            }
            let name = names::escape(&arg.name);
            module.line(node, format!("if let {name} = {name} {{"));
            module.line(
                node,
                format!(
                    "    parameters.append(Parameter(name: \"{}\", value: {name}))",
                    arg.name
                ),
            );
            module.line(node, "}");
        }
        module.line(
            node,
            format!(
                "let child = {constructor}(name: \"{}\", parameters: parameters)",
                field.name
            ),
        );
    }
    module.line(node, "addChild(child)");
    if builds_subselection {
        module.line(node, "buildOn(child)");
    }
    module.line(node, "return self");
}

/// Fragment methods let callers select fields of one concrete member of an
/// abstract type: the sub-selection is built on a detached builder, then
/// re-hung under an inline-fragment node scoped to that type.
fn push_fragment_method(
    module: &mut Module,
    parent: NodeId,
    possible: &TypeRef,
    self_type: &str,
) {
    let Some(name) = possible.name.as_deref() else {
        return;
    };
    let builder = names::child_builder(possible);
    let function = Function::new(format!("on{name}"))
        .public()
        .attribute("@discardableResult")
        .parameter(Parameter::new("buildOn", format!("({builder}) -> Void")))
        .returns(self_type);
    let node = module.push(parent, function);
    module.line(node, format!("let builder = {builder}(name: \"\")"));
    module.line(node, "buildOn(builder)");
    module.line(node, format!("let fragment = FragmentNode(typeName: \"{name}\")"));
    module.line(node, "fragment.adopt(childrenOf: builder)");
    module.line(node, "addChild(fragment)");
    module.line(node, "return self");
}
