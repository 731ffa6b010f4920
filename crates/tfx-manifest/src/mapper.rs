//! Field mapping from a plugin descriptor onto an app manifest
//!
//! The mapping always overwrites; there is no merge or skip-if-present
//! policy. The short name carries a templating token that a later
//! substitution step resolves, the mapper only emits it.

use crate::errors::ManifestError;
use crate::types::{AppManifest, PluginDescriptor};
use std::path::Path;
use tracing::debug;

/// Environment token appended to the short name, substituted by the
/// templating step at provisioning time
pub const ENV_PLACEHOLDER: &str = "${{TEAMSFX_ENV}}";

/// Copy descriptor identity fields onto the app manifest
pub fn apply_descriptor(descriptor: &PluginDescriptor, manifest: &mut AppManifest) {
    debug!(
        "Mapping descriptor '{}' onto app manifest",
        descriptor.name_for_human
    );

    manifest.name.full = descriptor.name_for_model.clone();
    manifest.name.short = format!("{}-{}", descriptor.name_for_human, ENV_PLACEHOLDER);
    manifest.description.full = descriptor.description_for_model.clone();
    manifest.description.short = descriptor.description_for_human.clone();
    manifest.developer.website_url = descriptor.legal_info_url.clone();
    manifest.developer.privacy_url = descriptor.legal_info_url.clone();
    manifest.developer.terms_of_use_url = descriptor.legal_info_url.clone();
}

/// Apply the descriptor and persist the rewritten manifest
pub fn update_manifest(
    descriptor: &PluginDescriptor,
    manifest: &mut AppManifest,
    path: &Path,
) -> Result<(), ManifestError> {
    apply_descriptor(descriptor, manifest);
    manifest.save_to_path(path)
}
