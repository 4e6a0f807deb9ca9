mod enums;
mod inputs;
mod models;
mod names;
mod network;
mod queries;
mod scalars;

pub use names::{resolve_type, resolve_type_with, snake_to_camel, ResolveOptions, Role};

use std::collections::BTreeMap;

use crate::ast::Module;
use crate::error::GenerateError;
use crate::schema::{Schema, SchemaIndex, TypeKind};

/// Named output groups; buckets map 1:1 to emitted Swift files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Scalars,
    Enums,
    Queries,
    Models,
    Inputs,
    Network,
}

impl Bucket {
    pub fn name(self) -> &'static str {
        match self {
            Bucket::Scalars => "Scalars",
            Bucket::Enums => "Enums",
            Bucket::Queries => "Queries",
            Bucket::Models => "Models",
            Bucket::Inputs => "Inputs",
            Bucket::Network => "Network",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.swift", self.name())
    }
}

#[derive(Debug, Default)]
pub struct GeneratorOptions {
    /// Custom scalar name → Swift representation. Scalars without an entry
    /// alias to `String`.
    pub scalar_overrides: BTreeMap<String, String>,
}

/// One rendered bucket, ready to be written out by the caller.
#[derive(Debug)]
pub struct GeneratedFile {
    pub bucket: Bucket,
    pub source: String,
}

/// Walks every non-introspection type definition, dispatches on its kind
/// and renders the six buckets. Types are processed sorted by kind ordinal;
/// the sort is stable so equal-kind types keep their source order and the
/// output is fully deterministic.
pub fn generate(
    schema: &Schema,
    options: &GeneratorOptions,
) -> Result<Vec<GeneratedFile>, GenerateError> {
    let index = SchemaIndex::new(&schema.types);
    let mut buckets = Buckets::default();

    let mut definitions: Vec<_> = schema
        .types
        .iter()
        .filter(|definition| !definition.is_introspection())
        .collect();
    definitions.sort_by_key(|definition| definition.kind.ordinal());

    for definition in definitions {
        tracing::debug!(name = %definition.name, kind = ?definition.kind, "generating declarations");
        match definition.kind {
            TypeKind::Scalar => scalars::generate(definition, options, &mut buckets.scalars),
            TypeKind::Enum => enums::generate(definition, &mut buckets.enums),
            TypeKind::InputObject => inputs::generate(definition, &mut buckets.inputs),
            TypeKind::Object => {
                queries::generate_object(definition, &mut buckets.queries);
                models::generate_model(definition, &mut buckets.models);
            }
            TypeKind::Interface | TypeKind::Union => {
                queries::generate_abstract(definition, &index, &mut buckets.queries);
                models::generate_model(definition, &mut buckets.models);
            }
            TypeKind::List | TypeKind::NonNull => {
                return Err(GenerateError::UnexpectedWrapper {
                    name: definition.name.clone(),
                    kind: definition.kind,
                });
            }
        }
    }

    network::generate(schema, &mut buckets.network);

    Ok(buckets.into_files())
}

#[derive(Default)]
struct Buckets {
    scalars: Module,
    enums: Module,
    queries: Module,
    models: Module,
    inputs: Module,
    network: Module,
}

impl Buckets {
    fn into_files(self) -> Vec<GeneratedFile> {
        [
            (Bucket::Scalars, self.scalars),
            (Bucket::Enums, self.enums),
            (Bucket::Queries, self.queries),
            (Bucket::Models, self.models),
            (Bucket::Inputs, self.inputs),
            (Bucket::Network, self.network),
        ]
        .into_iter()
        .map(|(bucket, module)| {
            tracing::debug!(bucket = bucket.name(), "rendering bucket");
            GeneratedFile {
                bucket,
                source: render_file(&module),
            }
        })
        .collect()
    }
}

const HEADER: &str = "// Generated by swiftgraph. Do not edit this file directly.\n";

fn render_file(module: &Module) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str("import Foundation\n");
    if !module.is_empty() {
        out.push('\n');
        out.push_str(&module.render());
    }
    out
}
