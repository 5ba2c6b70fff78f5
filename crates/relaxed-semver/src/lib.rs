//! Relaxed semantic version parsing and comparison
//!
//! This crate provides a single immutable value type, [`Version`], for version
//! identifiers of the form `MAJOR[.MINOR[.PATCH]][+BUILD]` where only the
//! major component is mandatory. Absent components are stored as absent but
//! read as zero when ordering two versions.

mod version;
mod version_parser;

pub use version::Version;
pub use version_parser::MalformedVersionError;
