#![forbid(unsafe_code)]

//! Compiles a GraphQL introspection document into the source text of a
//! statically typed Swift client library: query-builder classes that
//! assemble request documents, and model classes that decode response
//! payloads back into typed objects.
//!
//! The pipeline is strictly sequential: [`Schema::parse`] turns the raw
//! introspection JSON into typed definitions, [`generate`] walks them and
//! emits one rendered Swift source per [`Bucket`].

mod ast;
mod error;
mod generate;
mod schema;

pub use error::{GenerateError, SchemaError};
pub use generate::{
    generate, resolve_type, resolve_type_with, snake_to_camel, Bucket, GeneratedFile,
    GeneratorOptions, ResolveOptions, Role,
};
pub use schema::{
    EnumValue, Field, InputValue, Schema, SchemaIndex, TypeDefinition, TypeKind, TypeRef,
};
