//! Common utilities for the Kestrel parser.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated diagnostics on stderr

pub mod warning;
