//! Display nodes handed to the renderer.
//!
//! A `DisplayNode` is the renderer-neutral content of a cell, title or
//! footer. The engine never inspects it beyond extracting text for
//! measuring; how a node becomes pixels (or terminal cells) is up to the
//! renderer.

/// A fragment of the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayNode {
    /// Renders nothing.
    #[default]
    Empty,

    /// Plain text content.
    Text(String),

    /// A tagged element (e.g. `p`, `span`) wrapping children.
    Element {
        tag: String,
        class_name: Option<String>,
        children: Vec<DisplayNode>,
    },

    /// Several siblings without a wrapping element.
    Fragment(Vec<DisplayNode>),
}

impl DisplayNode {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create an element with no children.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            class_name: None,
            children: Vec::new(),
        }
    }

    /// Append a child. Non-element nodes are turned into a fragment.
    pub fn child(self, child: DisplayNode) -> Self {
        match self {
            Self::Element {
                tag,
                class_name,
                mut children,
            } => {
                children.push(child);
                Self::Element {
                    tag,
                    class_name,
                    children,
                }
            }
            Self::Fragment(mut children) => {
                children.push(child);
                Self::Fragment(children)
            }
            Self::Empty => child,
            other => Self::Fragment(vec![other, child]),
        }
    }

    /// Set the class name of an element. Ignored for other variants.
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        if let Self::Element { class_name, .. } = &mut self {
            *class_name = Some(name.into());
        }
        self
    }

    /// Whether this node renders nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::Element { .. } => false,
            Self::Fragment(children) => children.iter().all(DisplayNode::is_empty),
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(s) => out.push_str(s),
            Self::Element { children, .. } | Self::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<&str> for DisplayNode {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DisplayNode {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
