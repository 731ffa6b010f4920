//! Plugin descriptor and Teams app manifest handling for tfx.
//!
//! This crate owns the record types exchanged with the platform, the field
//! mapper that rewrites an app manifest from a plugin descriptor, the
//! validation checks against the store limits, and JSON persistence.

pub mod errors;
pub mod manifest;
pub mod mapper;
pub mod types;
pub mod validation;

pub use errors::ManifestError;
pub use manifest::{descriptor_url, WELL_KNOWN_PATH};
pub use mapper::{apply_descriptor, update_manifest, ENV_PLACEHOLDER};
pub use types::{
    ApiSpec, AppDescription, AppManifest, AppName, AuthSpec, AuthType, DeveloperInfo,
    PluginDescriptor,
};
pub use validation::{
    validate_descriptor, validate_lengths, DescriptorViolation, LengthViolation, ManifestField,
    DESCRIPTION_FULL_LIMIT, DESCRIPTION_SHORT_LIMIT, NAME_FULL_LIMIT, NAME_SHORT_LIMIT,
};
