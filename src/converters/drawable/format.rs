//! Re-serializes XML text with canonical indentation.
//!
//! The printer is purely syntactic. It does not validate tag balancing,
//! attribute correctness, or encoding; it re-tokenizes whatever it is given
//! and emits one token per line at a depth derived from the token shapes
//! seen so far. Feeding it the same document with any amount of whitespace
//! between tags produces identical output, and formatting an
//! already-formatted document reproduces it byte for byte.

use super::constants::INDENT_UNIT;
use regex::Regex;
use std::sync::OnceLock;

/// Whitespace strictly between a closing `>` and the next `<`.
fn re_inter_tag_whitespace() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r">\s+<").unwrap())
}

/// One markup token: a CDATA section (preferred at any position where both
/// alternatives could match) or a single tag.
fn re_markup_token() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"<!\[CDATA\[.*?\]\]>|<[^>]+>").unwrap())
}

/// Shape of one token in the collapsed document, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum XmlToken<'a> {
    /// `<![CDATA[ ... ]]>` section, emitted verbatim.
    CData(&'a str),
    /// `<!-- ... -->` comment, emitted verbatim.
    Comment(&'a str),
    /// Tag ending in `/>`; checked before `Closing` so `<br/>` never
    /// shifts depth.
    SelfClosing(&'a str),
    /// Tag starting with `</`; pops one indentation level.
    Closing(&'a str),
    /// Any other tag; pushes one indentation level. The XML declaration
    /// deliberately lands here, matching the canonical output shape.
    Opening(&'a str),
    /// Bare text content between tags, emitted trimmed.
    Text(&'a str),
}

impl<'a> XmlToken<'a> {
    fn classify(token: &'a str) -> Self {
        if token.starts_with("<![CDATA[") {
            XmlToken::CData(token)
        } else if token.starts_with("<!--") {
            XmlToken::Comment(token)
        } else if token.starts_with('<') && token.ends_with("/>") {
            XmlToken::SelfClosing(token)
        } else if token.starts_with("</") {
            XmlToken::Closing(token)
        } else if token.starts_with('<') {
            XmlToken::Opening(token)
        } else {
            XmlToken::Text(token)
        }
    }
}

/// Collapses inter-tag whitespace and line breaks so tokenization sees one
/// continuous run of markup.
fn collapse(xml: &str) -> String {
    let collapsed = re_inter_tag_whitespace().replace_all(xml, "><");
    collapsed
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Splits the collapsed document into markup and text tokens, dropping
/// tokens that are empty or whitespace-only.
fn tokenize(collapsed: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for m in re_markup_token().find_iter(collapsed) {
        if m.start() > cursor {
            tokens.push(&collapsed[cursor..m.start()]);
        }
        tokens.push(m.as_str());
        cursor = m.end();
    }
    if cursor < collapsed.len() {
        tokens.push(&collapsed[cursor..]);
    }
    tokens.retain(|t| !t.trim().is_empty());
    tokens
}

/// Returns `xml` re-serialized with canonical indentation (4 spaces per
/// nesting level), or an empty string when the input is empty or
/// whitespace-only.
///
/// Closing tags shallower than the current depth can only lower it to
/// zero: a stray closing tag at depth zero is emitted flush left and the
/// walk continues.
pub fn format_xml(xml: &str) -> String {
    let collapsed = collapse(xml);
    if collapsed.is_empty() {
        return String::new();
    }

    let mut depth: usize = 0;
    let mut lines: Vec<String> = Vec::new();
    for raw in tokenize(&collapsed) {
        match XmlToken::classify(raw) {
            XmlToken::CData(token) | XmlToken::Comment(token) | XmlToken::SelfClosing(token) => {
                lines.push(format!("{}{}", INDENT_UNIT.repeat(depth), token));
            }
            XmlToken::Closing(token) => {
                depth = depth.saturating_sub(1);
                lines.push(format!("{}{}", INDENT_UNIT.repeat(depth), token));
            }
            XmlToken::Opening(token) => {
                lines.push(format!("{}{}", INDENT_UNIT.repeat(depth), token));
                depth += 1;
            }
            XmlToken::Text(token) => {
                lines.push(format!("{}{}", INDENT_UNIT.repeat(depth), token.trim()));
            }
        }
    }

    lines.join("\n").trim().to_string()
}
