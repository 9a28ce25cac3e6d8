//! `WebDAV` XML fragments for responses.
//!
//! This module renders individual elements, escapes text and produces the
//! namespace declarations for a multistatus root element.

pub mod declaration;
pub mod escape;
pub mod tag;

pub use declaration::{NAMESPACES, multistatus_close, multistatus_open, namespaces};
pub use escape::{escape_text, unescape_text};
pub use tag::{TagRenderer, href_tag, status_tag, tag, text_tag, try_status_tag, try_tag};
