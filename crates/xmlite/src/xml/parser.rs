//! XML parser implementation
//!
//! A tolerant recursive-descent grammar over normalized text. Each rule
//! returns `None` when it does not apply at the cursor, and a rule that stops
//! halfway hands back whatever it built so far. Nothing is ever rejected.

use tracing::trace;

use crate::lexer::{is_word, Cursor};
use crate::xml::entity;
use crate::xml::model::{Declaration, Document, Node};

const CDATA_START: &str = "<![CDATA[";
const CDATA_END: &str = "]]>";

/// Configuration for the XML parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: usize,
    /// Maximum input size in bytes for byte and file input (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: usize, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

#[derive(Debug)]
struct Attribute<'a> {
    name: &'a str,
    value: &'a str,
}

/// XML parser
///
/// Expects text that already went through [`crate::lexer::normalize`].
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    depth: usize,
    /// Set once the depth limit is hit; no further tags are read.
    halted: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, Config::default())
    }

    /// Create a new parser with custom configuration
    pub const fn with_config(source: &'a str, config: Config) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            depth: 0,
            halted: false,
        }
    }

    /// Parse an XML document: an optional declaration, then an optional root.
    pub fn parse(mut self) -> Document {
        let declaration = self.declaration();
        let root = self.tag();
        if !self.cursor.is_eof() {
            trace!(
                unparsed = self.cursor.remaining().len(),
                "stopped before end of input"
            );
        }
        Document { declaration, root }
    }

    fn declaration(&mut self) -> Option<Declaration> {
        if !self.cursor.eat("<?xml") {
            return None;
        }
        self.cursor.skip_whitespace();

        let mut declaration = Declaration::default();
        while !(self.cursor.is_eof() || self.cursor.starts_with("?>")) {
            let Some(attr) = self.attribute() else {
                trace!("malformed declaration attribute, keeping partial declaration");
                return Some(declaration);
            };
            declaration
                .attributes
                .insert(attr.name.to_owned(), attr.value.to_owned());
        }

        if self.cursor.eat("?>") {
            self.cursor.skip_whitespace();
        }
        Some(declaration)
    }

    fn tag(&mut self) -> Option<Node> {
        if self.halted {
            return None;
        }
        if self.config.max_depth > 0 && self.depth >= self.config.max_depth {
            trace!(max = self.config.max_depth, "max depth reached, stopping");
            self.halted = true;
            return None;
        }

        let name = self.cursor.try_match(|c| {
            c.expect("<")?;
            let name = c.take_while1(is_tag_name_char)?;
            c.skip_whitespace();
            Some(name)
        })?;
        let mut node = Node::new(name);

        while !(self.cursor.is_eof()
            || self.cursor.starts_with(">")
            || self.cursor.starts_with("?>")
            || self.cursor.starts_with("/>"))
        {
            let Some(attr) = self.attribute() else {
                trace!(tag = name, "malformed attribute, keeping partial element");
                return Some(node);
            };
            node.attributes
                .insert(attr.name.to_owned(), attr.value.to_owned());
        }

        let self_closing = self.cursor.try_match(|c| {
            c.skip_whitespace();
            c.expect("/>")?;
            c.skip_whitespace();
            Some(())
        });
        if self_closing.is_some() {
            return Some(node);
        }

        self.cursor.try_match(|c| {
            c.eat("?");
            c.expect(">")?;
            c.skip_whitespace();
            Some(())
        });

        node.content = Some(self.content());

        self.depth += 1;
        while let Some(child) = self.tag() {
            node.children.push(child);
        }
        self.depth -= 1;

        // The closing name is not checked against the opening one.
        let closed = self.cursor.try_match(|c| {
            c.expect("</")?;
            c.take_while1(is_tag_name_char)?;
            c.expect(">")?;
            c.skip_whitespace();
            Some(())
        });
        if closed.is_none() {
            trace!(tag = name, "no closing tag");
        }

        Some(node)
    }

    fn content(&mut self) -> String {
        let cdata = self.cursor.try_match(|c| {
            c.expect(CDATA_START)?;
            c.take_until(CDATA_END)
        });
        if let Some(data) = cdata {
            return data.to_owned();
        }

        let text = self.cursor.take_while(|c| c != '<');
        entity::decode(text).into_owned()
    }

    fn attribute(&mut self) -> Option<Attribute<'a>> {
        self.cursor.try_match(|c| {
            let name = c.take_while1(is_attr_name_char)?;
            c.skip_whitespace();
            c.expect("=")?;
            c.skip_whitespace();
            let value = if c.eat("\"") {
                c.take_until("\"")?
            } else if c.eat("'") {
                c.take_until("'")?
            } else {
                c.take_while1(is_word)?
            };
            c.skip_whitespace();
            Some(Attribute { name, value })
        })
    }
}

/// `[\w\-:.]`
const fn is_tag_name_char(c: char) -> bool {
    is_word(c) || matches!(c, '-' | ':' | '.')
}

/// `[\w:\-]`
const fn is_attr_name_char(c: char) -> bool {
    is_word(c) || matches!(c, '-' | ':')
}
