//! Version string parsing and validation

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

lazy_static! {
    // Component grammar: one or more ASCII digits, nothing else. No sign, no
    // surrounding whitespace, no exponent forms.
    static ref COMPONENT_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Error raised when a version string does not decompose into a numeric major
/// component plus valid optional minor/patch/build components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unable to parse version string \"{0}\"")]
pub struct MalformedVersionError(pub String);

/// Parse a relaxed version string into a [`Version`].
///
/// The input is split on the first `+` into a number part and an optional
/// build part. The number part is split on `.`; the first three segments are
/// taken as major/minor/patch and any further segments are discarded without
/// validation. Every retained component must be a plain digit string that
/// fits in a `u64`.
pub(crate) fn parse(input: &str) -> Result<Version, MalformedVersionError> {
    let mut halves = input.splitn(2, '+');
    let number = halves.next().unwrap_or_default();
    let build = halves.next();

    let mut segments = number.split('.');
    let major = segments.next().unwrap_or_default();
    let minor = segments.next();
    let patch = segments.next();

    let major = component(major).ok_or_else(|| MalformedVersionError(input.to_string()))?;
    let minor = optional_component(minor).ok_or_else(|| MalformedVersionError(input.to_string()))?;
    let patch = optional_component(patch).ok_or_else(|| MalformedVersionError(input.to_string()))?;
    let build = optional_component(build).ok_or_else(|| MalformedVersionError(input.to_string()))?;

    Ok(Version {
        major,
        minor,
        patch,
        build,
    })
}

/// Validate and convert a single required component.
fn component(raw: &str) -> Option<u64> {
    if !COMPONENT_RE.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

/// Validate and convert a component that may be absent. Returns `None` on a
/// present-but-invalid component, `Some(None)` on an absent one.
fn optional_component(raw: Option<&str>) -> Option<Option<u64>> {
    match raw {
        None => Some(None),
        Some(raw) => component(raw).map(Some),
    }
}
