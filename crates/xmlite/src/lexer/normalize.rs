//! Source normalization ahead of the grammar

use super::cursor::is_space;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// Trim `input`, then drop every comment and every whitespace run that
/// directly follows a `>`.
///
/// One left-to-right pass. "Follows a `>`" looks at the unmodified input, so the
/// whitespace after a removed comment goes too. A `<!--` with no closing
/// `-->` is kept as ordinary text.
///
/// Inter-tag whitespace disappears as a side effect, which is why text
/// between sibling elements never reaches the grammar as readable content.
pub fn normalize(input: &str) -> String {
    let mut rest = input.trim_matches(is_space);
    let mut out = String::with_capacity(rest.len());
    let mut prev = None;

    while let Some(c) = rest.chars().next() {
        if prev == Some('>') && is_space(c) {
            let end = rest.find(|c: char| !is_space(c)).unwrap_or(rest.len());
            let (_, tail) = rest.split_at(end);
            rest = tail;
            prev = None;
            continue;
        }

        if let Some(body) = rest.strip_prefix(COMMENT_START) {
            if let Some(end) = body.find(COMMENT_END) {
                let (_, tail) = body.split_at(end + COMMENT_END.len());
                rest = tail;
                prev = Some('>');
                continue;
            }
        }

        out.push(c);
        prev = Some(c);
        let (_, tail) = rest.split_at(c.len_utf8());
        rest = tail;
    }

    out
}
