//! Shared configuration and error types for the `caltag` crates.

pub mod config;
pub mod error;
