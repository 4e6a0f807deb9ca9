use super::{render_docs, Declaration, Visibility};

/// One `case` of a raw-value enum. The case identifier is the generated
/// Swift name; the raw literal preserves the wire string.
#[derive(Debug)]
pub(crate) struct EnumCase {
    name: String,
    raw_value: String,
    docs: Vec<String>,
}

impl EnumCase {
    pub(crate) fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
            docs: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn docs(mut self, text: &str) -> Self {
        self.docs.extend(text.lines().map(str::to_owned));
        self
    }

    pub(crate) fn render(&self, out: &mut String, indent: &str) {
        render_docs(out, indent, &self.docs);
        out.push_str(indent);
        out.push_str("case ");
        out.push_str(&self.name);
        out.push_str(" = \"");
        out.push_str(&self.raw_value);
        out.push_str("\"\n");
    }
}

impl From<EnumCase> for Declaration {
    fn from(case: EnumCase) -> Self {
        Declaration::EnumCase(case)
    }
}

#[derive(Debug)]
pub(crate) struct TypeAlias {
    visibility: Visibility,
    name: String,
    target: String,
    docs: Vec<String>,
}

impl TypeAlias {
    pub(crate) fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::default(),
            name: name.into(),
            target: target.into(),
            docs: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    #[must_use]
    pub(crate) fn docs(mut self, text: &str) -> Self {
        self.docs.extend(text.lines().map(str::to_owned));
        self
    }

    pub(crate) fn render(&self, out: &mut String, indent: &str) {
        render_docs(out, indent, &self.docs);
        out.push_str(indent);
        out.push_str(self.visibility.prefix());
        out.push_str("typealias ");
        out.push_str(&self.name);
        out.push_str(" = ");
        out.push_str(&self.target);
        out.push('\n');
    }
}

impl From<TypeAlias> for Declaration {
    fn from(alias: TypeAlias) -> Self {
        Declaration::TypeAlias(alias)
    }
}
