//! XML entity and character reference decoding
//!
//! Handles the five predefined entities (`&amp; &lt; &gt; &quot; &apos;`) and
//! numeric references (`&#65;`, `&#x41;`). A reference must end in `;`.
//! Anything unrecognized is passed through unchanged, so decoding never fails.

use std::borrow::Cow;

const REPLACEMENT: char = '\u{fffd}';

/// Decode entity and character references in `text`.
///
/// Returns `Cow::Borrowed` when `text` contains no `&`.
pub fn decode(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        let (before, tail) = rest.split_at(amp);
        result.push_str(before);

        match decode_reference(tail) {
            Some((ch, len)) => {
                result.push(ch);
                rest = tail.get(len..).unwrap_or_default();
            }
            None => {
                result.push('&');
                rest = tail.get(1..).unwrap_or_default();
            }
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Decode the reference at the start of `text` (which begins with `&`),
/// returning the char and the number of bytes it spans.
fn decode_reference(text: &str) -> Option<(char, usize)> {
    let body = text.strip_prefix('&')?;
    let end = body.find(';')?;
    let (name, _) = body.split_at(end);
    let len = name.len() + 2;

    if let Some(digits) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        let ch = numeric(digits, 16)?;
        return Some((ch, len));
    }
    if let Some(digits) = name.strip_prefix('#') {
        let ch = numeric(digits, 10)?;
        return Some((ch, len));
    }

    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => return None,
    };
    Some((ch, len))
}

fn numeric(digits: &str, radix: u32) -> Option<char> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Overflowing references are out of range anyway.
    let code = u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);
    Some(code_point(code))
}

/// Map a numeric reference to a char the way HTML decoders do.
fn code_point(code: u32) -> char {
    if code == 0 || (0xd800..=0xdfff).contains(&code) || code > 0x10ffff {
        return REPLACEMENT;
    }
    let code = windows_1252(code).unwrap_or(code);
    char::from_u32(code).unwrap_or(REPLACEMENT)
}

/// C1 control references are read as Windows-1252 bytes.
const fn windows_1252(code: u32) -> Option<u32> {
    let mapped = match code {
        0x80 => 0x20ac,
        0x82 => 0x201a,
        0x83 => 0x0192,
        0x84 => 0x201e,
        0x85 => 0x2026,
        0x86 => 0x2020,
        0x87 => 0x2021,
        0x88 => 0x02c6,
        0x89 => 0x2030,
        0x8a => 0x0160,
        0x8b => 0x2039,
        0x8c => 0x0152,
        0x8e => 0x017d,
        0x91 => 0x2018,
        0x92 => 0x2019,
        0x93 => 0x201c,
        0x94 => 0x201d,
        0x95 => 0x2022,
        0x96 => 0x2013,
        0x97 => 0x2014,
        0x98 => 0x02dc,
        0x99 => 0x2122,
        0x9a => 0x0161,
        0x9b => 0x203a,
        0x9c => 0x0153,
        0x9e => 0x017e,
        0x9f => 0x0178,
        _ => return None,
    };
    Some(mapped)
}
