//! Record types exchanged with the platform
//!
//! Both records travel as JSON. Only the fields the mapper and validator
//! touch are modelled; everything else is carried through flattened maps so
//! a rewrite never drops manifest keys it does not know about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Plugin descriptor served from a domain's well-known location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    pub name_for_model: String,
    pub name_for_human: String,
    pub description_for_model: String,
    pub description_for_human: String,
    #[serde(default)]
    pub auth: AuthSpec,
    #[serde(default)]
    pub api: ApiSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub legal_info_url: String,
}

/// `api` block of a plugin descriptor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub api_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `auth` block of a plugin descriptor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSpec {
    #[serde(rename = "type", default)]
    pub auth_type: AuthType,
}

/// Authentication schemes a descriptor may declare
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    #[default]
    None,
    UserHttp,
    ServiceHttp,
    Oauth,
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuthType::None => "none",
            AuthType::UserHttp => "user_http",
            AuthType::ServiceHttp => "service_http",
            AuthType::Oauth => "oauth",
        };
        f.write_str(label)
    }
}

/// Teams app manifest, the destination record of the mapper
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppManifest {
    #[serde(default)]
    pub name: AppName,
    #[serde(default)]
    pub description: AppDescription,
    #[serde(default)]
    pub developer: DeveloperInfo,
    /// Keys the mapper never touches, preserved verbatim
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// `name` block of an app manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppName {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub full: String,
}

/// `description` block of an app manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppDescription {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub full: String,
}

/// `developer` block of an app manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub privacy_url: String,
    #[serde(default)]
    pub terms_of_use_url: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
