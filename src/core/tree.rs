//! Command grammar used for completion
//!
//! The tree is built once at startup and only read afterwards. Dynamic
//! nodes ask their value source for candidates on every lookup.

use std::{collections::BTreeMap, fmt, sync::Arc};

/// Something that produces the live values accepted at a dynamic node
pub trait ValueSource {
    /// Current values, in the order the source reports them
    fn values(&self) -> Vec<String>;
}

impl<F> ValueSource for F
where
    F: Fn() -> Vec<String>,
{
    fn values(&self) -> Vec<String> {
        self()
    }
}

/// A fixed word together with what it does
#[derive(Debug, Clone)]
pub struct Branch {
    /// Shown next to the word when completing
    pub description: String,
    pub node: CommandNode,
}

/// One token position in the command grammar
#[derive(Clone)]
pub enum CommandNode {
    /// Fixed vocabulary, keyed by the exact token
    Static(BTreeMap<String, Branch>),
    /// The next token is a runtime value
    Dynamic(Arc<dyn ValueSource>),
    /// Nothing may follow
    Terminal,
}

impl CommandNode {
    /// Build a static node from `(token, description, child)` triples
    pub fn with_children<I, S, D>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, D, CommandNode)>,
        S: Into<String>,
        D: Into<String>,
    {
        Self::Static(
            children
                .into_iter()
                .map(|(token, description, node)| {
                    (
                        token.into(),
                        Branch {
                            description: description.into(),
                            node,
                        },
                    )
                })
                .collect(),
        )
    }

    /// Build a dynamic node backed by `source`
    pub fn dynamic(source: Arc<dyn ValueSource>) -> Self {
        Self::Dynamic(source)
    }

    /// Static child for an exact, case-sensitive token
    pub fn child(&self, token: &str) -> Option<&CommandNode> {
        self.branch(token).map(|branch| &branch.node)
    }

    /// Description of a static token
    pub fn description(&self, token: &str) -> Option<&str> {
        self.branch(token).map(|branch| branch.description.as_str())
    }

    fn branch(&self, token: &str) -> Option<&Branch> {
        match self {
            Self::Static(children) => children.get(token),
            Self::Dynamic(_) | Self::Terminal => None,
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(children) => f
                .debug_map()
                .entries(children.iter().map(|(token, branch)| (token, &branch.node)))
                .finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
            Self::Terminal => f.write_str("Terminal"),
        }
    }
}

/// The complete shell grammar
#[derive(Debug, Clone)]
pub struct CommandTree {
    root: CommandNode,
}

impl CommandTree {
    /// Wrap an arbitrary root node
    #[must_use]
    pub const fn new(root: CommandNode) -> Self {
        Self { root }
    }

    /// The shell's grammar, with `interface_names` feeding `set interface`
    pub fn standard(interface_names: Arc<dyn ValueSource>) -> Self {
        let show = CommandNode::with_children([
            ("link", "Show interfaces", CommandNode::Terminal),
            ("address", "Show IP addresses", CommandNode::Terminal),
        ]);
        let set = CommandNode::with_children([(
            "interface",
            "Select an interface",
            CommandNode::dynamic(interface_names),
        )]);

        Self::new(CommandNode::with_children([
            ("show", "Show network state", show),
            ("set", "Change settings", set),
            ("exit", "Leave shell", CommandNode::Terminal),
            ("quit", "Leave shell", CommandNode::Terminal),
        ]))
    }

    pub const fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Node reached by following static tokens from the root
    ///
    /// `None` once a token is unknown or the path crosses a dynamic node.
    pub fn resolve(&self, tokens: &[&str]) -> Option<&CommandNode> {
        tokens
            .iter()
            .try_fold(&self.root, |node, token| node.child(token))
    }
}
