//! XML parser module

pub mod entity;
pub mod model;
pub mod parser;

pub use model::{Attributes, Declaration, Descendants, Document, Node};
pub use parser::{Config, Parser};
