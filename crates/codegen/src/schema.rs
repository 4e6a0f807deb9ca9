use std::collections::HashMap;

use serde::Deserialize;

use crate::error::SchemaError;

/// The eight GraphQL type classifications, deserialized from the
/// SCREAMING_SNAKE wire strings of the introspection format. Any other
/// string fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// `List` and `NonNull` never name a type; they wrap another reference.
    pub fn is_wrapper(self) -> bool {
        matches!(self, TypeKind::List | TypeKind::NonNull)
    }

    pub(crate) fn ordinal(self) -> u8 {
        self as u8
    }
}

/// A possibly-wrapped reference to a named type. `name` is present only at
/// non-wrapper kinds, `of_type` only at `List`/`NonNull`.
///
/// The wrapper chain is finite and acyclic; every derived query below is a
/// pure recursion over it, and the nullability of each nesting level is
/// computed independently (a list can be null while its elements are
/// non-null, and vice versa).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn list(of: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(of)),
        }
    }

    pub fn non_null(of: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(of)),
        }
    }

    /// The innermost non-wrapper reference.
    pub fn leaf(&self) -> &TypeRef {
        match &self.of_type {
            Some(inner) if self.kind.is_wrapper() => inner.leaf(),
            _ => self,
        }
    }

    /// Name of the innermost non-wrapper reference. Empty only on malformed
    /// input, which [`Schema::parse`] rejects up front.
    pub fn leaf_name(&self) -> &str {
        self.leaf().name.as_deref().unwrap_or_default()
    }

    /// Whether the leaf is a `Scalar` or `Enum`, i.e. a value that needs no
    /// sub-selection.
    pub fn has_scalar(&self) -> bool {
        matches!(self.leaf().kind, TypeKind::Scalar | TypeKind::Enum)
    }

    /// Whether the leaf is an `Interface` or `Union`.
    pub fn is_abstract(&self) -> bool {
        matches!(self.leaf().kind, TypeKind::Interface | TypeKind::Union)
    }

    /// Whether any wrapper in the chain is a `List`.
    pub fn is_collection(&self) -> bool {
        self.kind == TypeKind::List
            || self
                .of_type
                .as_ref()
                .is_some_and(|inner| inner.is_collection())
    }

    /// Whether the outermost kind is anything but `NonNull`.
    pub fn is_top_level_nullable(&self) -> bool {
        self.kind != TypeKind::NonNull
    }
}

/// One named schema type, immutable once parsed. The optional collections
/// are kind-dependent: `fields` on objects and interfaces, `input_fields`
/// on input objects, `interfaces` on objects, `enum_values` on enums,
/// `possible_types` on interfaces and unions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<Field>>,
    #[serde(default)]
    pub input_fields: Option<Vec<InputValue>>,
    #[serde(default)]
    pub interfaces: Option<Vec<TypeRef>>,
    #[serde(default)]
    pub enum_values: Option<Vec<EnumValue>>,
    #[serde(default)]
    pub possible_types: Option<Vec<TypeRef>>,
}

impl TypeDefinition {
    /// Types named with the introspection marker prefix are parsed and
    /// indexed but never generate declarations.
    pub fn is_introspection(&self) -> bool {
        self.name.starts_with("__")
    }

    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn input_fields(&self) -> &[InputValue] {
        self.input_fields.as_deref().unwrap_or_default()
    }

    pub fn interfaces(&self) -> &[TypeRef] {
        self.interfaces.as_deref().unwrap_or_default()
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    pub fn possible_types(&self) -> &[TypeRef] {
        self.possible_types.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub args: Vec<InputValue>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Shared introspection shape of field arguments and input-object fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    #[serde(rename = "__schema")]
    schema: SchemaData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaData {
    #[serde(default)]
    query_type: Option<RootType>,
    #[serde(default)]
    mutation_type: Option<RootType>,
    types: Vec<TypeDefinition>,
}

#[derive(Debug, Deserialize)]
struct RootType {
    name: String,
}

/// The parsed introspection document: root operation type names plus every
/// type definition in source order.
#[derive(Debug)]
pub struct Schema {
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub types: Vec<TypeDefinition>,
}

impl Schema {
    /// Parses the standard introspection envelope
    /// (`{ "data": { "__schema": … } }`) and checks the structural
    /// invariants the generator relies on: wrapper references carry
    /// `ofType`, terminal references carry a name, and no top-level
    /// definition has a wrapper kind.
    pub fn parse(json: &str) -> Result<Self, SchemaError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let envelope: Envelope =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
                SchemaError::malformed(err.path().to_string(), err.inner().to_string())
            })?;

        let schema = envelope.data.schema;
        validate(&schema.types)?;

        Ok(Self {
            query_type: schema.query_type.map(|root| root.name),
            mutation_type: schema.mutation_type.map(|root| root.name),
            types: schema.types,
        })
    }

    pub fn index(&self) -> SchemaIndex<'_> {
        SchemaIndex::new(&self.types)
    }
}

/// Name → definition lookup, built once after all types are parsed and
/// read-only from then on. Generation needs it because interfaces must
/// inspect possible types regardless of where they sit in the source array.
pub struct SchemaIndex<'a> {
    by_name: HashMap<&'a str, &'a TypeDefinition>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(types: &'a [TypeDefinition]) -> Self {
        Self {
            by_name: types
                .iter()
                .map(|definition| (definition.name.as_str(), definition))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&'a TypeDefinition> {
        self.by_name.get(name).copied()
    }
}

fn validate(types: &[TypeDefinition]) -> Result<(), SchemaError> {
    for definition in types {
        if definition.kind.is_wrapper() {
            return Err(SchemaError::malformed(
                format!("types.{}", definition.name),
                "wrapper kind at a top-level type definition",
            ));
        }
        for field in definition.fields() {
            let path = format!("types.{}.fields.{}", definition.name, field.name);
            validate_type_ref(&field.ty, &path)?;
            for arg in &field.args {
                validate_type_ref(&arg.ty, &format!("{path}.args.{}", arg.name))?;
            }
        }
        for input_field in definition.input_fields() {
            validate_type_ref(
                &input_field.ty,
                &format!("types.{}.inputFields.{}", definition.name, input_field.name),
            )?;
        }
    }
    Ok(())
}

fn validate_type_ref(ty: &TypeRef, path: &str) -> Result<(), SchemaError> {
    let mut current = ty;
    loop {
        if current.kind.is_wrapper() {
            match &current.of_type {
                Some(inner) => current = inner,
                None => return Err(SchemaError::malformed(path, "wrapper type without ofType")),
            }
        } else if current.name.as_deref().unwrap_or_default().is_empty() {
            return Err(SchemaError::malformed(path, "named type without a name"));
        } else {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> TypeRef {
        TypeRef::named(TypeKind::Scalar, "String")
    }

    #[test]
    fn leaf_skips_wrappers_at_any_depth() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::list(TypeRef::non_null(string()))));
        assert_eq!(ty.leaf().name.as_deref(), Some("String"));
        assert_eq!(ty.leaf().kind, TypeKind::Scalar);
        assert_eq!(TypeRef::non_null(string()).leaf_name(), "String");
        assert_eq!(TypeRef::list(string()).leaf_name(), "String");
    }

    #[test]
    fn collection_means_any_list_wrapper() {
        assert!(TypeRef::list(string()).is_collection());
        assert!(TypeRef::non_null(TypeRef::list(TypeRef::non_null(string()))).is_collection());
        assert!(!TypeRef::non_null(string()).is_collection());
        assert!(!string().is_collection());
    }

    #[test]
    fn top_level_nullability_only_looks_at_the_outermost_kind() {
        assert!(!TypeRef::non_null(TypeRef::list(string())).is_top_level_nullable());
        assert!(TypeRef::list(TypeRef::non_null(string())).is_top_level_nullable());
        assert!(string().is_top_level_nullable());
    }

    #[test]
    fn scalar_and_abstract_queries_look_at_the_leaf() {
        let enum_ref = TypeRef::named(TypeKind::Enum, "OrderDirection");
        assert!(TypeRef::list(enum_ref).has_scalar());
        assert!(TypeRef::non_null(string()).has_scalar());

        let interface = TypeRef::named(TypeKind::Interface, "Actor");
        assert!(TypeRef::non_null(TypeRef::list(interface)).is_abstract());
        assert!(!TypeRef::named(TypeKind::Object, "User").is_abstract());
    }

    #[test]
    fn parses_a_minimal_document() {
        let document = serde_json::json!({
            "data": {
                "__schema": {
                    "queryType": { "name": "Query" },
                    "mutationType": null,
                    "types": [
                        {
                            "kind": "OBJECT",
                            "name": "Query",
                            "description": "The root query type.",
                            "fields": [
                                {
                                    "name": "viewer",
                                    "type": {
                                        "kind": "NON_NULL",
                                        "ofType": { "kind": "OBJECT", "name": "User" }
                                    }
                                }
                            ]
                        },
                        {
                            "kind": "OBJECT",
                            "name": "User",
                            "fields": [
                                {
                                    "name": "id",
                                    "type": {
                                        "kind": "NON_NULL",
                                        "ofType": { "kind": "SCALAR", "name": "ID" }
                                    }
                                }
                            ]
                        },
                        { "kind": "SCALAR", "name": "__TypeKind" }
                    ],
                    "directives": []
                }
            }
        });

        let schema = Schema::parse(&document.to_string()).unwrap();
        assert_eq!(schema.query_type.as_deref(), Some("Query"));
        assert_eq!(schema.mutation_type, None);
        assert_eq!(schema.types.len(), 3);
        assert!(schema.types[2].is_introspection());

        let index = schema.index();
        let user = index.get("User").unwrap();
        assert_eq!(user.kind, TypeKind::Object);
        assert_eq!(user.fields()[0].name, "id");
        assert!(index.get("Repository").is_none());
    }

    #[test]
    fn unknown_kind_fails_with_the_offending_path() {
        let document = serde_json::json!({
            "data": {
                "__schema": {
                    "types": [
                        { "kind": "OBJECT", "name": "Query", "fields": [] },
                        { "kind": "PHANTOM", "name": "Ghost" }
                    ]
                }
            }
        });

        let error = Schema::parse(&document.to_string()).unwrap_err();
        let SchemaError::Malformed { path, message } = error;
        assert_eq!(path, "data.__schema.types[1].kind");
        assert!(message.contains("PHANTOM"), "{message}");
    }

    #[test]
    fn wrapper_without_of_type_is_rejected() {
        let document = serde_json::json!({
            "data": {
                "__schema": {
                    "types": [
                        {
                            "kind": "OBJECT",
                            "name": "Query",
                            "fields": [
                                { "name": "broken", "type": { "kind": "LIST" } }
                            ]
                        }
                    ]
                }
            }
        });

        let error = Schema::parse(&document.to_string()).unwrap_err();
        let SchemaError::Malformed { path, .. } = error;
        assert_eq!(path, "types.Query.fields.broken");
    }
}
