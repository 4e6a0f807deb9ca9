use std::borrow::Cow;

use crate::schema::{TypeKind, TypeRef};

/// Scalars the target language already provides; everything else gets a
/// typealias in the Scalars bucket. The hand-written runtime ships
/// `typealias Boolean = Bool` so the wire spelling stays usable as-is.
pub(crate) const STANDARD_SCALARS: &[&str] = &["Int", "Boolean", "Float", "String", "URL"];

/// Which side of the generated library a type name is resolved for:
/// query builders or response models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Query,
    Model,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Use the raw schema name instead of the role-specific generated name.
    pub unmodified: bool,
    /// Skip the nullability suffix entirely; the caller handles optionality
    /// separately.
    pub ignore_null: bool,
}

pub(crate) fn query_builder(name: &str) -> String {
    format!("{name}Query")
}

pub(crate) fn query_concrete(name: &str) -> String {
    format!("{name}QueryConcrete")
}

pub(crate) fn model(name: &str) -> String {
    name.to_owned()
}

pub(crate) fn model_concrete(name: &str) -> String {
    format!("{name}Concrete")
}

/// The instantiable query-builder type for a leaf reference: abstract kinds
/// resolve to their concrete proxy, everything else to the plain builder.
pub(crate) fn child_builder(leaf: &TypeRef) -> String {
    let name = leaf.name.as_deref().unwrap_or_default();
    match leaf.kind {
        TypeKind::Interface | TypeKind::Union => query_concrete(name),
        _ => query_builder(name),
    }
}

/// The model type constructed for a leaf reference on the response side.
pub(crate) fn model_leaf(leaf: &TypeRef) -> String {
    let name = leaf.name.as_deref().unwrap_or_default();
    match leaf.kind {
        TypeKind::Interface | TypeKind::Union => model_concrete(name),
        _ => model(name),
    }
}

pub fn resolve_type(ty: &TypeRef, role: Role) -> String {
    resolve_type_with(ty, role, ResolveOptions::default())
}

/// Renders a wrapped type reference as target-language syntax, reproducing
/// GraphQL's independent nullability of lists and their elements at
/// arbitrary nesting depth. A `List` wraps its element in `[...]` and then
/// applies its own nullability; `NonNull` contributes no syntax and only
/// suppresses the suffix of its immediate child; terminals pick their base
/// name and suffix `?` inside a list (element presence cannot be assumed)
/// or `!` at top level (the payload is assumed to contain selected fields).
pub fn resolve_type_with(ty: &TypeRef, role: Role, options: ResolveOptions) -> String {
    resolve(ty, role, options, false, false)
}

fn resolve(
    ty: &TypeRef,
    role: Role,
    options: ResolveOptions,
    within_list: bool,
    non_null: bool,
) -> String {
    match ty.kind {
        TypeKind::NonNull => ty
            .of_type
            .as_deref()
            .map(|inner| resolve(inner, role, options, within_list, true))
            .unwrap_or_default(),
        TypeKind::List => {
            let element = ty
                .of_type
                .as_deref()
                .map(|inner| resolve(inner, role, options, true, false))
                .unwrap_or_default();
            suffixed(format!("[{element}]"), options, within_list, non_null)
        }
        _ => {
            let name = ty.name.as_deref().unwrap_or_default();
            let base = if options.unmodified {
                name.to_owned()
            } else {
                match (role, ty.kind) {
                    (Role::Query, TypeKind::Object) => query_builder(name),
                    (Role::Query, TypeKind::Interface | TypeKind::Union) => query_concrete(name),
                    (Role::Model, TypeKind::Interface | TypeKind::Union) => model_concrete(name),
                    _ => name.to_owned(),
                }
            };
            suffixed(base, options, within_list, non_null)
        }
    }
}

fn suffixed(base: String, options: ResolveOptions, within_list: bool, non_null: bool) -> String {
    if non_null || options.ignore_null {
        base
    } else if within_list {
        format!("{base}?")
    } else {
        format!("{base}!")
    }
}

/// Converts a SCREAMING_SNAKE wire name into a camel-case identifier:
/// split on `_`, lowercase the first segment, capitalize the rest. A name
/// without underscores is simply lowercased; an empty name has no
/// identifier.
pub fn snake_to_camel(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len());
    for (position, segment) in name.split('_').enumerate() {
        if position == 0 {
            out.push_str(&segment.to_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Swift keywords that need backtick escaping when they show up as member
/// or parameter names.
const RESERVED: &[&str] = &[
    "as", "associatedtype", "break", "case", "catch", "class", "continue", "default", "defer",
    "deinit", "do", "else", "enum", "extension", "fallthrough", "false", "fileprivate", "for",
    "func", "guard", "if", "import", "in", "init", "inout", "internal", "is", "let", "nil",
    "operator", "private", "protocol", "public", "repeat", "rethrows", "return", "self", "Self",
    "static", "struct", "subscript", "super", "switch", "throw", "throws", "true", "try",
    "typealias", "var", "where", "while",
];

pub(crate) fn escape(name: &str) -> Cow<'_, str> {
    if RESERVED.contains(&name) {
        Cow::Owned(format!("`{name}`"))
    } else {
        Cow::Borrowed(name)
    }
}

pub(crate) fn quote_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
