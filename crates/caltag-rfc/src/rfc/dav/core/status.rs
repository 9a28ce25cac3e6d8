//! HTTP status lines for `DAV:status` elements.

use salvo::http::StatusCode;

use crate::error::{RfcError, RfcResult};

/// Returns the standard reason phrase for a status code, if it has one.
#[must_use]
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
}

/// Returns the status line `HTTP/1.1 <code> <reason>`.
///
/// Codes without a standard reason keep the separating space and get an empty
/// reason, e.g. `HTTP/1.1 299 `.
#[must_use]
pub fn status_line(code: u16) -> String {
    let reason = reason_phrase(code).unwrap_or_else(|| {
        tracing::debug!(code, "No reason phrase for status code");
        ""
    });
    format!("HTTP/1.1 {code} {reason}")
}

/// Like [`status_line`], but refuses codes without a standard reason phrase.
///
/// ## Errors
/// Returns `RfcError::InvalidStatus` for codes outside 100-999 and
/// `RfcError::UnknownStatus` for codes that have no reason phrase.
pub fn try_status_line(code: u16) -> RfcResult<String> {
    let status = StatusCode::from_u16(code)
        .ok()
        .ok_or(RfcError::InvalidStatus(code))?;
    let reason = status
        .canonical_reason()
        .ok_or(RfcError::UnknownStatus(code))?;
    Ok(format!("HTTP/1.1 {code} {reason}"))
}
