//! Manifest persistence - loading and saving the JSON records
//!
//! The descriptor is read-only input. The app manifest is rewritten in
//! place with an atomic temp-file-and-rename write, keeping the destination
//! format's house style of tab indentation.

use crate::errors::ManifestError;
use crate::types::{AppManifest, PluginDescriptor};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Well-known location of a plugin descriptor, relative to its domain
pub const WELL_KNOWN_PATH: &str = "/.well-known/ai-plugin.json";

/// Build the full descriptor URL for a domain
pub fn descriptor_url(domain: &str) -> String {
    format!("{}{}", domain.trim_end_matches('/'), WELL_KNOWN_PATH)
}

impl PluginDescriptor {
    /// Load a plugin descriptor from a JSON file
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading plugin descriptor from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let descriptor: PluginDescriptor = serde_json::from_str(&content)?;
        Ok(descriptor)
    }
}

impl AppManifest {
    /// Load an app manifest from a JSON file
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }

        debug!("Loading app manifest from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let manifest: AppManifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Serialize with tab indentation, matching the manifest house style
    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Save the app manifest to a specific path with an atomic write
    pub fn save_to_path(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_json_string()?;

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("json.tmp");
        {
            let mut file = std::fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }
        std::fs::rename(&temp_path, path)?;

        info!("App manifest written to {:?}", path);
        Ok(())
    }
}
