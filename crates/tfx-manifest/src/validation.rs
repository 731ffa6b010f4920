//! Validation of descriptor and manifest records
//!
//! Checks are collected rather than short-circuited so a caller can report
//! every problem at once and decide policy itself.

use crate::types::{AppManifest, AuthType, PluginDescriptor};
use std::fmt;
use thiserror::Error;

/// Store limit for `name/short`
pub const NAME_SHORT_LIMIT: usize = 30;
/// Store limit for `name/full`
pub const NAME_FULL_LIMIT: usize = 100;
/// Store limit for `description/short`
pub const DESCRIPTION_SHORT_LIMIT: usize = 80;
/// Store limit for `description/full`
pub const DESCRIPTION_FULL_LIMIT: usize = 4000;

/// Manifest fields covered by the length checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestField {
    NameShort,
    NameFull,
    DescriptionShort,
    DescriptionFull,
}

impl ManifestField {
    /// Path of the field within the manifest
    pub fn path(self) -> &'static str {
        match self {
            ManifestField::NameShort => "name/short",
            ManifestField::NameFull => "name/full",
            ManifestField::DescriptionShort => "description/short",
            ManifestField::DescriptionFull => "description/full",
        }
    }

    /// Character limit the store enforces for the field
    pub fn limit(self) -> usize {
        match self {
            ManifestField::NameShort => NAME_SHORT_LIMIT,
            ManifestField::NameFull => NAME_FULL_LIMIT,
            ManifestField::DescriptionShort => DESCRIPTION_SHORT_LIMIT,
            ManifestField::DescriptionFull => DESCRIPTION_FULL_LIMIT,
        }
    }
}

impl fmt::Display for ManifestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A single length-check failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthViolation {
    pub field: ManifestField,
    pub limit: usize,
    /// Character count found; zero means the field was empty
    pub actual: usize,
}

impl fmt::Display for LengthViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.actual == 0 {
            write!(f, "/{} must not be empty", self.field)
        } else {
            write!(
                f,
                "/{} must not have more than {} characters (found {})",
                self.field, self.limit, self.actual
            )
        }
    }
}

/// Run the store length checks, collecting every violation
pub fn validate_lengths(manifest: &AppManifest) -> Vec<LengthViolation> {
    let fields = [
        (ManifestField::NameShort, manifest.name.short.as_str()),
        (ManifestField::NameFull, manifest.name.full.as_str()),
        (
            ManifestField::DescriptionShort,
            manifest.description.short.as_str(),
        ),
        (
            ManifestField::DescriptionFull,
            manifest.description.full.as_str(),
        ),
    ];

    let mut violations = Vec::new();
    for (field, value) in fields {
        let actual = value.chars().count();
        if actual == 0 || actual > field.limit() {
            violations.push(LengthViolation {
                field,
                limit: field.limit(),
                actual,
            });
        }
    }
    violations
}

/// Descriptor problems that make scaffolding impossible
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorViolation {
    #[error("missing api url in plugin descriptor")]
    ApiUrlMissing,

    #[error("auth type '{0}' is not supported, expected 'none'")]
    AuthNotSupported(AuthType),
}

/// Check a descriptor before mapping, collecting every violation
pub fn validate_descriptor(descriptor: &PluginDescriptor) -> Vec<DescriptorViolation> {
    let mut violations = Vec::new();

    if descriptor.api.url.as_deref().map_or(true, str::is_empty) {
        violations.push(DescriptorViolation::ApiUrlMissing);
    }
    if descriptor.auth.auth_type != AuthType::None {
        violations.push(DescriptorViolation::AuthNotSupported(
            descriptor.auth.auth_type,
        ));
    }
    violations
}
