//! `WebDAV` XML vocabulary.
//!
//! This module defines the namespace registry, qualified names and the
//! element catalog used in multistatus and property-discovery responses.

pub mod catalog;
mod namespace;
mod status;

pub use namespace::{
    CALDAV_NS, CALDAV_PREFIX, CS_NS, CS_PREFIX, DAV_NS, DAV_PREFIX, Namespace, QName,
};
pub use status::{reason_phrase, status_line, try_status_line};
