//! Namespace-qualified XML fragments for `WebDAV`/`CalDAV` responses.
//!
//! The vocabulary lives in [`rfc::dav::core`] and the string builders in
//! [`rfc::dav::build`]. Nothing here parses XML; callers concatenate the
//! fragments into full response bodies.

pub mod error;
pub mod rfc;
