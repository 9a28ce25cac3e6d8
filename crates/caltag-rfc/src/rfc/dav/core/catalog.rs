//! Qualified names of every element a `CalDAV` responder writes.

use super::namespace::QName;

pub const CALENDAR: QName = QName::caldav("calendar");
pub const CALENDAR_DATA: QName = QName::caldav("calendar-data");
pub const CALENDAR_HOME_SET: QName = QName::caldav("calendar-home-set");
pub const CALENDAR_QUERY: QName = QName::caldav("calendar-query");
pub const CALENDAR_MULTIGET: QName = QName::caldav("calendar-multiget");
pub const CALENDAR_USER_ADDRESS_SET: QName = QName::caldav("calendar-user-address-set");
pub const SUPPORTED_CALENDAR_COMPONENT_SET: QName =
    QName::caldav("supported-calendar-component-set");

pub const COLLECTION: QName = QName::dav("collection");
pub const CURRENT_USER_PRINCIPAL: QName = QName::dav("current-user-principal");
pub const DISPLAY_NAME: QName = QName::dav("displayname");
pub const GET_CONTENT_LENGTH: QName = QName::dav("getcontentlength");
pub const GET_CONTENT_TYPE: QName = QName::dav("getcontenttype");
pub const GET_ETAG: QName = QName::dav("getetag");
pub const GET_LAST_MODIFIED: QName = QName::dav("getlastmodified");
pub const HREF: QName = QName::dav("href");
pub const OWNER: QName = QName::dav("owner");
pub const PRINCIPAL: QName = QName::dav("principal");
pub const PRINCIPAL_COLLECTION_SET: QName = QName::dav("principal-collection-set");
pub const PRINCIPAL_URL: QName = QName::dav("principal-URL");
pub const RESOURCE_TYPE: QName = QName::dav("resourcetype");
pub const STATUS: QName = QName::dav("status");

// Multistatus envelope
pub const MULTISTATUS: QName = QName::dav("multistatus");
pub const RESPONSE: QName = QName::dav("response");
pub const PROPSTAT: QName = QName::dav("propstat");
pub const PROP: QName = QName::dav("prop");

pub const GET_CTAG: QName = QName::cs("getctag");

/// Every catalog entry, for iteration and lookup.
pub static ALL: [QName; 26] = [
    CALENDAR,
    CALENDAR_DATA,
    CALENDAR_HOME_SET,
    CALENDAR_QUERY,
    CALENDAR_MULTIGET,
    CALENDAR_USER_ADDRESS_SET,
    SUPPORTED_CALENDAR_COMPONENT_SET,
    COLLECTION,
    CURRENT_USER_PRINCIPAL,
    DISPLAY_NAME,
    GET_CONTENT_LENGTH,
    GET_CONTENT_TYPE,
    GET_ETAG,
    GET_LAST_MODIFIED,
    HREF,
    OWNER,
    PRINCIPAL,
    PRINCIPAL_COLLECTION_SET,
    PRINCIPAL_URL,
    RESOURCE_TYPE,
    STATUS,
    MULTISTATUS,
    RESPONSE,
    PROPSTAT,
    PROP,
    GET_CTAG,
];

/// Finds the catalog entry with the given namespace URI and local name.
#[must_use]
pub fn lookup(namespace: &str, local_name: &str) -> Option<&'static QName> {
    ALL.iter()
        .find(|name| name.namespace_uri() == namespace && name.local_name() == local_name)
}
