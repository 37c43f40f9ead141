//! Common utilities for the swatch extractor.
//!
//! This crate provides shared infrastructure used by all extraction components:
//! - **Warning System** - deduplicated warnings for malformed page values
//! - **Targets** - normalisation of user-supplied page addresses

pub mod url;
pub mod warning;
