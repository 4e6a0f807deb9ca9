use itertools::Itertools;

use super::{Declaration, Visibility};

#[derive(Debug)]
pub(crate) enum FunctionName {
    Plain(String),
    Initializer { required: bool },
}

#[derive(Debug)]
pub(crate) struct Parameter {
    pub(crate) name: String,
    pub(crate) ty: String,
    pub(crate) default_value: Option<String>,
}

impl Parameter {
    pub(crate) fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default_value: None,
        }
    }

    #[must_use]
    pub(crate) fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    fn render(&self) -> String {
        match &self.default_value {
            Some(value) => format!("{}: {} = {value}", self.name, self.ty),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// A function or initializer. The body, when present, is the ordered list
/// of statement-line children attached to this node in the arena; a node
/// without children renders as a bare signature (a protocol requirement).
#[derive(Debug)]
pub(crate) struct Function {
    pub(crate) name: FunctionName,
    pub(crate) visibility: Visibility,
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) returns: Option<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) docs: Vec<String>,
}

impl Function {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: FunctionName::Plain(name.into()),
            visibility: Visibility::default(),
            parameters: Vec::new(),
            returns: None,
            attributes: Vec::new(),
            docs: Vec::new(),
        }
    }

    pub(crate) fn initializer(required: bool) -> Self {
        Self {
            name: FunctionName::Initializer { required },
            visibility: Visibility::default(),
            parameters: Vec::new(),
            returns: None,
            attributes: Vec::new(),
            docs: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    #[must_use]
    pub(crate) fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub(crate) fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    #[must_use]
    pub(crate) fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    #[must_use]
    pub(crate) fn docs(mut self, text: &str) -> Self {
        self.docs.extend(text.lines().map(str::to_owned));
        self
    }

    pub(crate) fn render_signature(&self, out: &mut String) {
        out.push_str(self.visibility.prefix());
        match &self.name {
            FunctionName::Plain(name) => {
                out.push_str("func ");
                out.push_str(name);
            }
            FunctionName::Initializer { required } => {
                if *required {
                    out.push_str("required ");
                }
                out.push_str("init");
            }
        }
        out.push('(');
        out.push_str(
            &self
                .parameters
                .iter()
                .map(Parameter::render)
                .join(", "),
        );
        out.push(')');
        if let Some(returns) = &self.returns {
            out.push_str(" -> ");
            out.push_str(returns);
        }
    }
}

impl From<Function> for Declaration {
    fn from(function: Function) -> Self {
        Declaration::Function(function)
    }
}
