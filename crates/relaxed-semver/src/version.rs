//! The relaxed version value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version_parser::{self, MalformedVersionError};

/// An immutable version of the form `MAJOR[.MINOR[.PATCH]][+BUILD]`.
///
/// Only the major component is required. An absent component is stored as
/// absent, which is distinct from zero: `1.0` and `1.0.0` render differently
/// and are not [`Version::is_same`], yet they occupy the same position in the
/// ordering because comparison reads absent components as zero.
///
/// The `Ord`/`PartialEq` impls follow the ordering semantics, so
/// `Version::new("1.0")? == Version::new("1.0.0")?` holds; use
/// [`Version::is_same`] when presence matters.
#[derive(Debug, Clone, Copy)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: Option<u64>,
    pub(crate) patch: Option<u64>,
    pub(crate) build: Option<u64>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Fails with [`MalformedVersionError`] when the input does not decompose
    /// into a numeric major plus valid optional minor/patch/build components.
    pub fn new(input: &str) -> Result<Self, MalformedVersionError> {
        version_parser::parse(input)
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component, if one was specified.
    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    /// The patch component, if one was specified.
    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// The build component, if one was specified.
    pub fn build(&self) -> Option<u64> {
        self.build
    }

    /// Strict field-by-field equality, including presence.
    ///
    /// Stricter than `==`: an absent component only equals an absent one, so
    /// `1.0` is not the same as `1.0.0`.
    pub fn is_same(&self, that: &Version) -> bool {
        self.major == that.major
            && self.minor == that.minor
            && self.patch == that.patch
            && self.build == that.build
    }

    /// True iff `self` orders at or above `that`.
    pub fn is_greater_or_equal(&self, that: &Version) -> bool {
        self.compare_to(that) != Ordering::Less
    }

    /// Compare component-wise in major, minor, patch, build order, reading an
    /// absent component as zero.
    pub fn compare_to(&self, that: &Version) -> Ordering {
        self.comparison_parts().cmp(&that.comparison_parts())
    }

    fn comparison_parts(&self) -> [u64; 4] {
        [
            self.major,
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
            self.build.unwrap_or(0),
        ]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{patch}")?;
        }
        if let Some(build) = self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = MalformedVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::new(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}
