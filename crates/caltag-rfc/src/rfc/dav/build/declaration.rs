//! Namespace declarations for the document root.

use crate::rfc::dav::core::{
    CALDAV_NS, CALDAV_PREFIX, CS_NS, CS_PREFIX, DAV_NS, DAV_PREFIX, catalog,
};

/// `xmlns:*` attributes for every registered namespace, space separated.
pub const NAMESPACES: &str = const_str::concat!(
    "xmlns:",
    DAV_PREFIX,
    "=\"",
    DAV_NS,
    "\" ",
    "xmlns:",
    CALDAV_PREFIX,
    "=\"",
    CALDAV_NS,
    "\" ",
    "xmlns:",
    CS_PREFIX,
    "=\"",
    CS_NS,
    "\""
);

/// Returns the namespace declarations to splice into a root element's start tag.
#[must_use]
pub fn namespaces() -> String {
    NAMESPACES.to_owned()
}

/// Returns `<D:multistatus …>` carrying the namespace declarations.
#[must_use]
pub fn multistatus_open() -> String {
    format!("<{} {NAMESPACES}>", catalog::MULTISTATUS.prefixed_name())
}

/// Returns `</D:multistatus>`.
#[must_use]
pub fn multistatus_close() -> String {
    format!("</{}>", catalog::MULTISTATUS.prefixed_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_in_order() {
        assert_eq!(
            namespaces(),
            r#"xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav" xmlns:CS="http://calendarserver.org/ns/""#
        );
    }

    #[test]
    fn declarations_are_stable() {
        assert_eq!(namespaces(), namespaces());
        assert_eq!(namespaces().matches("xmlns:").count(), 3);
        assert!(!namespaces().ends_with(' '));
    }

    #[test]
    fn multistatus_envelope() {
        assert_eq!(multistatus_open(), format!("<D:multistatus {NAMESPACES}>"));
        assert_eq!(multistatus_close(), "</D:multistatus>");
    }
}
