mod block;
mod member;
mod property;
mod signature;

use itertools::Itertools;

pub(crate) use block::{Block, BlockKind};
pub(crate) use member::{EnumCase, TypeAlias};
pub(crate) use property::{Accessors, Property};
pub(crate) use signature::{Function, Parameter};

const INDENT: &str = "    ";

/// Handle into an [`Ast`] arena. Nodes are addressed by index; a node keeps
/// a weak back-reference to its parent while the parent owns the ordered
/// list of child ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    decl: Declaration,
}

/// One declaration in the tree. Nodes are appended during generation,
/// never mutated afterwards, and re-parenting is unsupported.
#[derive(Debug)]
pub(crate) enum Declaration {
    Block(Block),
    Function(Function),
    Property(Property),
    EnumCase(EnumCase),
    TypeAlias(TypeAlias),
    Line(String),
}

/// Arena of declaration nodes. Indentation is a pure function of parent
/// hops, recomputed on every render, so rendering always reflects the
/// current tree and never mutates it.
#[derive(Debug, Default)]
pub(crate) struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub(crate) fn push(
        &mut self,
        parent: Option<NodeId>,
        decl: impl Into<Declaration>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            decl: decl.into(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub(crate) fn depth(&self, id: NodeId) -> usize {
        let mut hops = 0;
        let mut current = self.nodes[id.0].parent;
        while let Some(parent) = current {
            hops += 1;
            current = self.nodes[parent.0].parent;
        }
        hops
    }

    pub(crate) fn render(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.render_into(id, &mut out);
        out
    }

    fn render_into(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        let indent = INDENT.repeat(self.depth(id));

        match &node.decl {
            Declaration::Block(block) => {
                render_docs(out, &indent, &block.docs);
                out.push_str(&indent);
                out.push_str(block.visibility.prefix());
                out.push_str(block.kind.keyword());
                out.push(' ');
                out.push_str(&block.name);
                if !block.inherits.is_empty() {
                    out.push_str(": ");
                    out.push_str(&block.inherits.iter().join(", "));
                }
                if node.children.is_empty() {
                    out.push_str(" {}\n");
                } else {
                    out.push_str(" {\n");
                    for (position, child) in node.children.iter().enumerate() {
                        if position > 0 {
                            out.push('\n');
                        }
                        self.render_into(*child, out);
                    }
                    out.push_str(&indent);
                    out.push_str("}\n");
                }
            }
            Declaration::Function(function) => {
                render_docs(out, &indent, &function.docs);
                for attribute in &function.attributes {
                    out.push_str(&indent);
                    out.push_str(attribute);
                    out.push('\n');
                }
                out.push_str(&indent);
                function.render_signature(out);
                if node.children.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(" {\n");
                    for child in &node.children {
                        self.render_into(*child, out);
                    }
                    out.push_str(&indent);
                    out.push_str("}\n");
                }
            }
            Declaration::Property(property) => property.render(out, &indent),
            Declaration::EnumCase(case) => case.render(out, &indent),
            Declaration::TypeAlias(alias) => alias.render(out, &indent),
            Declaration::Line(text) => {
                if text.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&indent);
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
    }
}

/// Declaration visibility; `Internal` renders no keyword, matching Swift's
/// implicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Visibility {
    #[default]
    Internal,
    Public,
}

impl Visibility {
    fn prefix(self) -> &'static str {
        match self {
            Visibility::Internal => "",
            Visibility::Public => "public ",
        }
    }
}

fn render_docs(out: &mut String, indent: &str, docs: &[String]) {
    for line in docs {
        out.push_str(indent);
        if line.is_empty() {
            out.push_str("///\n");
        } else {
            out.push_str("/// ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// One generation bucket: its own arena plus the ordered roots appended so
/// far. Buckets never share nodes, so each renders independently.
#[derive(Debug, Default)]
pub(crate) struct Module {
    ast: Ast,
    roots: Vec<NodeId>,
}

impl Module {
    pub(crate) fn push_root(&mut self, decl: impl Into<Declaration>) -> NodeId {
        let id = self.ast.push(None, decl);
        self.roots.push(id);
        id
    }

    pub(crate) fn push(&mut self, parent: NodeId, decl: impl Into<Declaration>) -> NodeId {
        self.ast.push(Some(parent), decl)
    }

    pub(crate) fn line(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.ast.push(Some(parent), Declaration::Line(text.into()))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for (position, root) in self.roots.iter().enumerate() {
            if position > 0 {
                out.push('\n');
            }
            out.push_str(&self.ast.render(*root));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[test]
    fn block_members_are_separated_by_blank_lines() {
        let mut module = Module::default();
        let class = module.push_root(
            Block::new(BlockKind::Class, "RepositoryQuery")
                .public()
                .inherits("GraphQuery")
                .inherits("NodeQuery"),
        );
        module.push(
            class,
            Property::computed(
                "name",
                "RepositoryQuery",
                vec![
                    "addChild(GraphQuery(name: \"name\", parameters: []))".to_owned(),
                    "return self".to_owned(),
                ],
            )
            .public(),
        );
        let method = module.push(
            class,
            Function::new("owner")
                .public()
                .attribute("@discardableResult")
                .parameter(Parameter::new("buildOn", "(UserQuery) -> Void"))
                .returns("RepositoryQuery"),
        );
        module.line(method, "let child = UserQuery(name: \"owner\", parameters: [])");
        module.line(method, "addChild(child)");
        module.line(method, "buildOn(child)");
        module.line(method, "return self");

        expect![[r#"
            public class RepositoryQuery: GraphQuery, NodeQuery {
                public var name: RepositoryQuery {
                    addChild(GraphQuery(name: "name", parameters: []))
                    return self
                }

                @discardableResult
                public func owner(buildOn: (UserQuery) -> Void) -> RepositoryQuery {
                    let child = UserQuery(name: "owner", parameters: [])
                    addChild(child)
                    buildOn(child)
                    return self
                }
            }
        "#]]
        .assert_eq(&module.render());
    }

    #[test]
    fn empty_blocks_render_without_a_body() {
        let mut module = Module::default();
        module.push_root(Block::new(BlockKind::Protocol, "SearchResultQuery").public());
        module.push_root(
            Block::new(BlockKind::Extension, "UserQuery").inherits("SearchResultQuery"),
        );

        expect![[r#"
            public protocol SearchResultQuery {}

            extension UserQuery: SearchResultQuery {}
        "#]]
        .assert_eq(&module.render());
    }

    #[test]
    fn indentation_follows_parent_hops() {
        let mut module = Module::default();
        let outer = module.push_root(Block::new(BlockKind::Enum, "Outer").public());
        let inner = module.push(outer, Block::new(BlockKind::Struct, "Inner"));
        module.push(inner, Property::stored("value", "Int").public());

        expect![[r#"
            public enum Outer {
                struct Inner {
                    public var value: Int
                }
            }
        "#]]
        .assert_eq(&module.render());
    }

    #[test]
    fn accessor_properties_render_in_both_forms() {
        let mut module = Module::default();
        let model = module.push_root(Block::new(BlockKind::Class, "User").public());
        module.push(
            model,
            Property::with_accessors(
                "login",
                "String",
                Accessors {
                    get: vec!["value(for: \"login\")".to_owned()],
                    set: Some(vec!["set(newValue, for: \"login\")".to_owned()]),
                    ..Accessors::default()
                },
            )
            .public(),
        );
        module.push(
            model,
            Property::with_accessors("id", "Self", Accessors::default()),
        );

        expect![[r#"
            public class User {
                public var login: String {
                    get { value(for: "login") }
                    set { set(newValue, for: "login") }
                }

                var id: Self { get }
            }
        "#]]
        .assert_eq(&module.render());
    }

    #[test]
    fn initializers_and_enum_cases_render() {
        let mut module = Module::default();
        let block = module.push_root(
            Block::new(BlockKind::Enum, "OrderDirection")
                .public()
                .inherits("String"),
        );
        module.push(
            block,
            EnumCase::new("asc", "ASC").docs("Sort from smallest to largest."),
        );
        module.push(block, EnumCase::new("desc", "DESC"));

        let init = module.push_root(
            Function::initializer(true)
                .public()
                .parameter(Parameter::new("json", "[String: Any]")),
        );
        module.line(init, "super.init(json: json)");

        expect![[r#"
            public enum OrderDirection: String {
                /// Sort from smallest to largest.
                case asc = "ASC"

                case desc = "DESC"
            }

            public required init(json: [String: Any]) {
                super.init(json: json)
            }
        "#]]
        .assert_eq(&module.render());
    }

    #[test]
    fn render_reflects_nodes_appended_after_a_previous_render() {
        let mut module = Module::default();
        let block = module.push_root(Block::new(BlockKind::Struct, "ReviewInput").public());
        let before = module.render();
        assert!(before.contains("public struct ReviewInput {}"));

        module.push(block, Property::stored("stars", "Int").public());
        let after = module.render();
        assert!(after.contains("    public var stars: Int"));
        assert!(!after.contains("{}"));
    }
}
