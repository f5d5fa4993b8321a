//! Text cursor for anchored matching

/// Cursor over normalized source text.
///
/// Holds an offset into the borrowed input; consuming never copies. Every
/// matching helper is anchored at the current position.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create cursor from text
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Text not yet consumed
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Lookahead without consuming
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Consume `prefix` if the remaining text starts with it
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Like [`Cursor::eat`], but usable with `?` inside a rule
    pub fn expect(&mut self, prefix: &str) -> Option<()> {
        self.eat(prefix).then_some(())
    }

    /// Consume the longest run of chars matching `pred` (possibly empty)
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.remaining();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        let (taken, _) = rest.split_at(len);
        self.pos += len;
        taken
    }

    /// Like [`Cursor::take_while`], but requires at least one char
    pub fn take_while1(&mut self, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let taken = self.take_while(pred);
        (!taken.is_empty()).then_some(taken)
    }

    /// Consume up to and including the first `delim`, returning the text before it.
    ///
    /// Shortest match: stops at the first occurrence. Nothing is consumed when
    /// `delim` does not occur.
    pub fn take_until(&mut self, delim: &str) -> Option<&'a str> {
        let rest = self.remaining();
        let end = rest.find(delim)?;
        let (taken, _) = rest.split_at(end);
        self.pos += end + delim.len();
        Some(taken)
    }

    /// Skip whitespace
    pub fn skip_whitespace(&mut self) {
        self.take_while(is_space);
    }

    /// Run `rule` as one atomic match.
    ///
    /// On `Some` the cursor stays past whatever the rule consumed. On `None`
    /// the cursor is put back where it was.
    pub fn try_match<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let matched = rule(self);
        if matched.is_none() {
            self.pos = start;
        }
        matched
    }
}

/// Whitespace as matched by `\s` in ECMAScript regular expressions.
pub const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// ASCII word char, `[A-Za-z0-9_]`
pub const fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
