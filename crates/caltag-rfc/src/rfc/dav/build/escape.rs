//! Escaping of element text.

use std::borrow::Cow;

use crate::error::{RfcError, RfcResult};

/// Escapes text for use as element content.
///
/// `&`, `<`, `>`, `"` and `'` become entity references. Tab, line feed and
/// carriage return become `&#x9;`, `&#xA;` and `&#xD;` so that a parser's
/// end-of-line normalization cannot turn CRLF into LF. Characters that XML 1.0
/// does not allow anywhere in a document (other C0 controls, U+FFFE and
/// U+FFFF) are replaced with U+FFFD.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let escaped = quick_xml::escape::escape(text);
    let mut out = String::with_capacity(escaped.len());
    let mut replaced = false;

    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if is_xml_char(c) => out.push(c),
            _ => {
                replaced = true;
                out.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }

    if replaced {
        tracing::debug!(len = text.len(), "Replaced characters not allowed in XML");
    }
    out
}

/// Decodes entity and character references produced by [`escape_text`].
///
/// ## Errors
/// Returns `RfcError::EscapeError` if the text holds an unterminated or
/// unknown reference.
pub fn unescape_text(text: &str) -> RfcResult<String> {
    quick_xml::escape::unescape(text)
        .map(Cow::into_owned)
        .map_err(RfcError::from)
}

/// The `Char` production of XML 1.0.
const fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
