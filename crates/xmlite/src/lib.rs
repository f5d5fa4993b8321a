//! xmlite - a small, tolerant XML reader
//!
//! Turns XML text into an owned tree of [`Node`]s. The grammar is lenient:
//! it never rejects input, it stops where the markup stops making sense and
//! returns what it built up to that point. There is no DTD support, no
//! namespace resolution (prefixes stay part of the name) and no writer.
//!
//! # Quick Start
//!
//! ```
//! let doc = xmlite::parse(r#"<?xml version="1.0"?><a x='1'>hi &amp; bye<b/></a>"#);
//! let root = doc.root.unwrap_or_default();
//! assert_eq!(root.name, "a");
//! assert_eq!(root.attr("x"), Some("1"));
//! assert_eq!(root.content.as_deref(), Some("hi & bye"));
//! assert!(root.children[0].is_self_closing());
//! ```
//!
//! # Limitations
//!
//! An element's `content` is only the text between its opening tag and its
//! first child. Text between siblings (`<a>x<b/>y<c/></a>`) is not kept, and
//! closing tag names are not checked against the opening ones.

#![forbid(unsafe_code)]

use std::path::Path;

use tracing::{debug, instrument};

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod input;
pub use input::Input;

pub mod lexer;

pub mod xml;
pub use xml::{Attributes, Config, Declaration, Document, Node, Parser};

/// Parse XML from string with the default configuration
pub fn parse(input: &str) -> Document {
    parse_with_config(input, Config::default())
}

/// Parse XML from string with custom configuration
pub fn parse_with_config(input: &str, config: Config) -> Document {
    let source = lexer::normalize(input);
    debug!(
        input_len = input.len(),
        normalized_len = source.len(),
        "parsing xml"
    );
    let doc = Parser::with_config(&source, config).parse();
    debug!(
        declaration = doc.declaration.is_some(),
        root = doc.root.as_ref().map(|n| n.name.as_str()),
        "parsed xml"
    );
    doc
}

/// Parse XML from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    from_bytes_with_config(bytes, Config::default())
}

/// Parse XML from bytes with custom configuration
pub fn from_bytes_with_config(bytes: &[u8], config: Config) -> Result<Document> {
    parse_input(&Input::from_bytes(bytes), config)
}

/// Read and parse an XML file
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    parse_file_with_config(path, Config::default())
}

/// Read and parse an XML file with custom configuration
pub fn parse_file_with_config(path: impl AsRef<Path>, config: Config) -> Result<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        Error::with_message(
            ErrorKind::Io,
            format!("failed to read {}: {e}", path.display()),
        )
    })?;
    debug!(bytes = bytes.len(), "file read");

    let name = path.to_string_lossy();
    parse_input(&Input::from_bytes(&bytes).with_filename(&name), config)
}

fn parse_input(input: &Input<'_>, config: Config) -> Result<Document> {
    input.check_size(config.max_size)?;
    let text = input.as_str()?;
    Ok(parse_with_config(text, config))
}
