use super::{render_docs, Declaration, Visibility, INDENT};

/// Accessor blocks of a property. An all-empty set of accessors renders the
/// protocol-requirement form `{ get }`.
#[derive(Debug, Default)]
pub(crate) struct Accessors {
    pub(crate) get: Vec<String>,
    pub(crate) set: Option<Vec<String>>,
    pub(crate) will_set: Option<Vec<String>>,
    pub(crate) did_set: Option<Vec<String>>,
}

impl Accessors {
    fn is_requirement(&self) -> bool {
        self.get.is_empty()
            && self.set.is_none()
            && self.will_set.is_none()
            && self.did_set.is_none()
    }
}

#[derive(Debug)]
enum PropertyBody {
    Stored,
    Computed(Vec<String>),
    Accessors(Accessors),
}

#[derive(Debug)]
pub(crate) struct Property {
    visibility: Visibility,
    is_static: bool,
    is_override: bool,
    mutable: bool,
    name: String,
    ty: String,
    attributes: Vec<String>,
    docs: Vec<String>,
    body: PropertyBody,
}

#[allow(dead_code)]
impl Property {
    fn base(name: impl Into<String>, ty: impl Into<String>, body: PropertyBody) -> Self {
        Self {
            visibility: Visibility::default(),
            is_static: false,
            is_override: false,
            mutable: true,
            name: name.into(),
            ty: ty.into(),
            attributes: Vec::new(),
            docs: Vec::new(),
            body,
        }
    }

    /// A stored property with no body, e.g. `public var stars: Int`.
    pub(crate) fn stored(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::base(name, ty, PropertyBody::Stored)
    }

    /// A computed property with an implicit getter body.
    pub(crate) fn computed(
        name: impl Into<String>,
        ty: impl Into<String>,
        lines: Vec<String>,
    ) -> Self {
        Self::base(name, ty, PropertyBody::Computed(lines))
    }

    pub(crate) fn with_accessors(
        name: impl Into<String>,
        ty: impl Into<String>,
        accessors: Accessors,
    ) -> Self {
        Self::base(name, ty, PropertyBody::Accessors(accessors))
    }

    #[must_use]
    pub(crate) fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    #[must_use]
    pub(crate) fn static_scope(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub(crate) fn override_declaration(mut self) -> Self {
        self.is_override = true;
        self
    }

    #[must_use]
    pub(crate) fn immutable(mut self) -> Self {
        self.mutable = false;
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

    pub(crate) fn render(&self, out: &mut String, indent: &str) {
        render_docs(out, indent, &self.docs);
        for attribute in &self.attributes {
            out.push_str(indent);
            out.push_str(attribute);
            out.push('\n');
        }

        let mut head = String::new();
        head.push_str(indent);
        head.push_str(self.visibility.prefix());
        if self.is_override {
            head.push_str("override ");
        }
        if self.is_static {
            head.push_str("static ");
        }
        head.push_str(if self.mutable { "var" } else { "let" });
        head.push(' ');
        head.push_str(&self.name);
        head.push_str(": ");
        head.push_str(&self.ty);

        match &self.body {
            PropertyBody::Stored => {
                out.push_str(&head);
                out.push('\n');
            }
            PropertyBody::Computed(lines) if lines.len() == 1 => {
                out.push_str(&head);
                out.push_str(" { ");
                out.push_str(&lines[0]);
                out.push_str(" }\n");
            }
            PropertyBody::Computed(lines) => {
                out.push_str(&head);
                out.push_str(" {\n");
                for line in lines {
                    out.push_str(indent);
                    out.push_str(INDENT);
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(indent);
                out.push_str("}\n");
            }
            PropertyBody::Accessors(accessors) if accessors.is_requirement() => {
                out.push_str(&head);
                out.push_str(" { get }\n");
            }
            PropertyBody::Accessors(accessors) => {
                out.push_str(&head);
                out.push_str(" {\n");
                render_accessor(out, indent, "get", &accessors.get);
                if let Some(lines) = &accessors.set {
                    render_accessor(out, indent, "set", lines);
                }
                if let Some(lines) = &accessors.will_set {
                    render_accessor(out, indent, "willSet", lines);
                }
                if let Some(lines) = &accessors.did_set {
                    render_accessor(out, indent, "didSet", lines);
                }
                out.push_str(indent);
                out.push_str("}\n");
            }
        }
    }
}

fn render_accessor(out: &mut String, indent: &str, keyword: &str, lines: &[String]) {
    out.push_str(indent);
    out.push_str(INDENT);
    out.push_str(keyword);
    match lines {
        [] => out.push('\n'),
        [line] => {
            out.push_str(" { ");
            out.push_str(line);
            out.push_str(" }\n");
        }
        _ => {
            out.push_str(" {\n");
            for line in lines {
                out.push_str(indent);
                out.push_str(INDENT);
                out.push_str(INDENT);
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(indent);
            out.push_str(INDENT);
            out.push_str("}\n");
        }
    }
}

impl From<Property> for Declaration {
    fn from(property: Property) -> Self {
        Declaration::Property(property)
    }
}
