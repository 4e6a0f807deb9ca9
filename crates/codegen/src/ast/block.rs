use super::{Declaration, Visibility};

/// Container declaration kinds and the Swift keyword each renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Class,
    Struct,
    Protocol,
    Extension,
    Enum,
}

impl BlockKind {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            BlockKind::Class => "class",
            BlockKind::Struct => "struct",
            BlockKind::Protocol => "protocol",
            BlockKind::Extension => "extension",
            BlockKind::Enum => "enum",
        }
    }
}

#[derive(Debug)]
pub(crate) struct Block {
    pub(crate) kind: BlockKind,
    pub(crate) visibility: Visibility,
    pub(crate) name: String,
    pub(crate) inherits: Vec<String>,
    pub(crate) docs: Vec<String>,
}

impl Block {
    pub(crate) fn new(kind: BlockKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            visibility: Visibility::default(),
            name: name.into(),
            inherits: Vec::new(),
            docs: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    #[must_use]
    pub(crate) fn inherits(mut self, name: impl Into<String>) -> Self {
        self.inherits.push(name.into());
        self
    }

    #[must_use]
    pub(crate) fn docs(mut self, text: &str) -> Self {
        self.docs.extend(text.lines().map(str::to_owned));
        self
    }
}

impl From<Block> for Declaration {
    fn from(block: Block) -> Self {
        Declaration::Block(block)
    }
}
