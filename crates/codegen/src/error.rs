use thiserror::Error;

/// Errors raised while turning introspection JSON into a [`crate::Schema`].
///
/// The introspection document is machine-produced, so any shape violation is
/// treated as unrecoverable: the run stops at the first malformed entity
/// instead of producing partial output.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A missing key, a value of the wrong shape, or an unrecognized `kind`
    /// string. `path` locates the offending value inside the document.
    #[error("malformed introspection document at `{path}`: {message}")]
    Malformed { path: String, message: String },
}

impl SchemaError {
    pub(crate) fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors raised during declaration generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A `LIST` or `NON_NULL` kind appeared as a top-level type definition.
    /// Wrapper kinds only make sense inside a type reference chain.
    #[error("type definition `{name}` has wrapper kind {kind:?}")]
    UnexpectedWrapper {
        name: String,
        kind: crate::TypeKind,
    },
}
