//! Java `.properties` text codec
//!
//! Output is plain ASCII: everything outside printable ASCII is written as
//! `\uXXXX` (surrogate pairs above the BMP), so files can be read back by
//! JVM tooling as ISO-8859-1. Input is decoded as ISO-8859-1 for the same
//! reason.

use crate::shared::Result;
use chrono::{DateTime, Utc};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Renders `entries` as a properties document
///
/// The document starts with `#comment` and `#timestamp` lines followed by
/// one `key=value` line per entry, in iteration order.
pub(crate) fn encode<'a, I>(entries: I, comment: &str, timestamp: DateTime<Utc>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    out.push('#');
    escape_into(&mut out, comment, EscapeSpace::Never);
    out.push('\n');
    out.push('#');
    out.push_str(&timestamp.format("%a %b %d %H:%M:%S UTC %Y").to_string());
    out.push('\n');

    for (key, value) in entries {
        escape_into(&mut out, key, EscapeSpace::All);
        out.push('=');
        escape_into(&mut out, value, EscapeSpace::Leading);
        out.push('\n');
    }
    out
}

/// Decodes ISO-8859-1 bytes into text
pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parses a properties document into its entries, in document order
///
/// A key that appears more than once is returned once per occurrence;
/// collecting into a map keeps the last one.
///
/// # Errors
/// Returns an error on a malformed `\uXXXX` escape
pub(crate) fn decode(input: &str) -> Result<Vec<(String, String)>> {
    logical_lines(input)
        .iter()
        .map(|line| {
            let (key, value) = split_key_value(line);
            Ok((unescape(key)?, unescape(value)?))
        })
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EscapeSpace {
    Never,
    Leading,
    All,
}

fn escape_into(out: &mut String, text: &str, escape_space: EscapeSpace) {
    for (index, c) in text.chars().enumerate() {
        match c {
            ' ' => {
                let escape = match escape_space {
                    EscapeSpace::All => true,
                    EscapeSpace::Leading => index == 0,
                    EscapeSpace::Never => false,
                };
                if escape {
                    out.push('\\');
                }
                out.push(' ');
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' | '\\' if escape_space != EscapeSpace::Never => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    push_unicode_escape(out, *unit);
                }
            }
        }
    }
}

fn push_unicode_escape(out: &mut String, unit: u16) {
    out.push_str("\\u");
    for shift in [12, 8, 4, 0] {
        out.push(char::from(HEX_DIGITS[usize::from((unit >> shift) & 0xF)]));
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Joins continuation lines and drops blank lines and comments. Escapes
/// are left in place.
fn logical_lines(input: &str) -> Vec<String> {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut continuing = false;

    for natural in normalized.split('\n') {
        let segment = natural.trim_start_matches(is_blank);
        if !continuing && (segment.is_empty() || segment.starts_with(['#', '!'])) {
            continue;
        }

        let trailing_backslashes = segment.chars().rev().take_while(|&c| c == '\\').count();
        if trailing_backslashes % 2 == 1 {
            current.push_str(&segment[..segment.len() - 1]);
            continuing = true;
        } else {
            current.push_str(segment);
            lines.push(std::mem::take(&mut current));
            continuing = false;
        }
    }
    if continuing {
        lines.push(current);
    }
    lines
}

/// Splits a logical line at the first unescaped `=`, `:` or blank
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' {
            key_end = index;
            value_start = index + 1;
            has_separator = true;
            break;
        } else if is_blank(c) {
            key_end = index;
            value_start = index + 1;
            break;
        }
    }

    let mut rest = &line[value_start..];
    loop {
        let Some(c) = rest.chars().next() else { break };
        if is_blank(c) {
            rest = &rest[1..];
        } else if !has_separator && (c == '=' || c == ':') {
            has_separator = true;
            rest = &rest[1..];
        } else {
            break;
        }
    }

    (&line[..key_end], rest)
}

fn unescape(text: &str) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        let decoded = if c == '\\' {
            match chars.next() {
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                        anyhow::bail!("Malformed \\uxxxx encoding: \\u{}", hex);
                    }
                    let unit = u16::from_str_radix(&hex, 16)?;
                    units.push(unit);
                    continue;
                }
                Some('t') => '\t',
                Some('n') => '\n',
                Some('r') => '\r',
                Some('f') => '\x0c',
                Some(other) => other,
                None => break,
            }
        } else {
            c
        };
        let mut buf = [0u16; 2];
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    Ok(String::from_utf16_lossy(&units))
}
