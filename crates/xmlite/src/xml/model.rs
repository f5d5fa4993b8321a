//! XML data model

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attribute name to value. Keys are unique; a repeated name keeps the last value.
pub type Attributes = IndexMap<String, String>;

/// XML document
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub declaration: Option<Declaration>,
    pub root: Option<Node>,
}

impl Document {
    /// True when neither a declaration nor a root element was found
    pub const fn is_empty(&self) -> bool {
        self.declaration.is_none() && self.root.is_none()
    }
}

/// The `<?xml ...?>` prolog
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declaration {
    pub attributes: Attributes,
}

/// XML element.
///
/// `content` holds the text between the opening tag and the first child (or
/// the closing tag). It is `None` exactly for self-closing elements. Text that
/// appears between sibling children is not kept.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub content: Option<String>,
}

impl Node {
    /// Element with `name` and nothing else
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First direct child called `name`
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Direct children called `name`, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub const fn is_self_closing(&self) -> bool {
        self.content.is_none()
    }

    /// This node and all of its descendants, depth-first in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`Node::descendants`]
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
