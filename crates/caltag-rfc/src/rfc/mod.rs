//! Protocol vocabularies.

pub mod dav;
