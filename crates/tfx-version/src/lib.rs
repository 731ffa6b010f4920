//! Extension version parsing and comparison for tfx.
//!
//! Versions follow the `major.minor.patch[-pre]` convention used by the
//! extension marketplace. A missing patch segment defaults to zero, and a
//! release (no pre tag) orders after any prerelease of the same triplet.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("malformed version string '{0}'")]
    Malformed(String),
}

/// A parsed `major.minor.patch[-pre]` version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
}

impl Version {
    /// Build a release version from a numeric triplet
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Attach a prerelease tag
    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    /// Whether this version carries a prerelease tag
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (core, pre) = match input.split_once('-') {
            Some((core, tag)) if !tag.is_empty() => (core, Some(tag.to_string())),
            Some(_) => return Err(VersionError::Malformed(input.to_string())),
            None => (input, None),
        };

        let mut segments = core.split('.');
        let major = parse_segment(segments.next(), input)?;
        let minor = parse_segment(segments.next(), input)?;
        let patch = match segments.next() {
            Some(segment) => parse_segment(Some(segment), input)?,
            None => 0,
        };
        if segments.next().is_some() {
            return Err(VersionError::Malformed(input.to_string()));
        }

        Ok(Version {
            major,
            minor,
            patch,
            pre,
        })
    }
}

fn parse_segment(segment: Option<&str>, input: &str) -> Result<u64, VersionError> {
    segment
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| VersionError::Malformed(input.to_string()))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                // a release outranks any prerelease of the same triplet
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(left), Some(right)) => left.cmp(right),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two version strings, parsing both first
pub fn compare(left: &str, right: &str) -> Result<Ordering, VersionError> {
    let parsed_left: Version = left.parse()?;
    let parsed_right: Version = right.parse()?;
    Ok(parsed_left.cmp(&parsed_right))
}
