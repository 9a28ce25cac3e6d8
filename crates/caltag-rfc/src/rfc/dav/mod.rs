//! `WebDAV`/`CalDAV` XML vocabulary and fragment builders.
//!
//! ## Submodules
//!
//! - [`core`] - Namespaces, qualified names and the element catalog
//! - [`build`] - Tag rendering, escaping and namespace declarations

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use self::build::{
    NAMESPACES, TagRenderer, escape_text, href_tag, namespaces, status_tag, tag, text_tag,
    try_tag,
};
pub use self::core::{CALDAV_NS, CS_NS, DAV_NS, Namespace, QName, catalog};
