//! Lexical layer: source normalization and the matching cursor

pub mod cursor;
pub mod normalize;

pub use cursor::{is_space, is_word, Cursor};
pub use normalize::normalize;
