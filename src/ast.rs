use std::fmt;

/// What a syntax tree node stands for.
///
/// Names are resolved against the registry while the tree is built, so the
/// tag already records whether a name is an operator or a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTag {
    /// An operator applied to the node's children, such as `+` or `sin`.
    Operator(String),
    /// A named constant such as `pi`.
    Constant(String),
    /// A number literal, kept as text and converted during evaluation.
    Number(String),
}

/// A node of the syntax tree built for one expression.
///
/// Every node owns its children outright. Constant and number nodes are
/// always leaves; operator nodes may have any number of children, since
/// operand counts are checked by each operator during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The resolved meaning of this node.
    pub tag:      NodeTag,
    /// Operands of an operator node, in source order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an operator node with the given operands.
    #[must_use]
    pub fn operator(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self { tag: NodeTag::Operator(name.into()),
               children }
    }

    /// Creates a constant leaf.
    #[must_use]
    pub fn constant(name: impl Into<String>) -> Self {
        Self { tag:      NodeTag::Constant(name.into()),
               children: Vec::new(), }
    }

    /// Creates a number literal leaf.
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self { tag:      NodeTag::Number(text.into()),
               children: Vec::new(), }
    }

    /// Returns the number of nested levels in this tree, counting the node
    /// itself.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Writes the tree back in prefix notation, e.g. `(+ 1 (* 2 pi))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            NodeTag::Constant(name) => write!(f, "{name}"),
            NodeTag::Number(text) => write!(f, "{text}"),
            NodeTag::Operator(name) => {
                write!(f, "({name}")?;
                for child in &self.children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            },
        }
    }
}
