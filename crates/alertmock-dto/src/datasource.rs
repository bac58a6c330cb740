//! Data-source instance settings.
//!
//! Mirrors the instance settings shape the dashboard frontend resolves data
//! sources through, including the plugin metadata block.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type tag of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceType {
    /// A Prometheus-compatible time series database.
    Prometheus,
    /// A Loki log aggregation backend.
    Loki,
    /// An external Alertmanager.
    Alertmanager,
}

impl DataSourceType {
    /// Returns the type tag as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prometheus => "prometheus",
            Self::Loki => "loki",
            Self::Alertmanager => "alertmanager",
        }
    }
}

impl fmt::Display for DataSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How queries reach the data source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceAccess {
    /// Queries are proxied through the dashboard backend.
    #[default]
    Proxy,
    /// Queries go directly from the browser to the data source.
    Direct,
}

/// Author block of a plugin's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginAuthor {
    /// Author display name.
    pub name: String,
}

/// Logo urls of a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginLogos {
    /// Url of the small logo.
    pub small: String,
    /// Url of the large logo.
    pub large: String,
}

/// An external link advertised by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginLink {
    /// Link text.
    pub name: String,
    /// Link target url.
    pub url: String,
}

/// A screenshot advertised by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginScreenshot {
    /// Screenshot caption.
    pub name: String,
    /// Screenshot url.
    pub path: String,
}

/// Descriptive info block of a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin author.
    pub author: PluginAuthor,
    /// Plugin description.
    pub description: String,
    /// Last update marker, empty when unknown.
    pub updated: String,
    /// Plugin version, empty when unknown.
    pub version: String,
    /// Plugin logos.
    pub logos: PluginLogos,
    /// External links.
    pub links: Vec<PluginLink>,
    /// Screenshots.
    pub screenshots: Vec<PluginScreenshot>,
}

/// Metadata of the plugin backing a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMeta {
    /// Plugin id (e.g. `prometheus`).
    pub id: String,
    /// Plugin display name.
    pub name: String,
    /// Plugin kind tag.
    #[serde(rename = "type")]
    pub plugin_type: String,
    /// Base url the plugin's assets are served from.
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    /// Module path the plugin is loaded from.
    pub module: String,
    /// Descriptive info block.
    pub info: PluginInfo,
}

/// Settings of a configured data-source instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceInstanceSettings {
    /// Numeric instance id.
    pub id: i64,
    /// Stable instance uid.
    pub uid: String,
    /// Data source type tag.
    #[serde(rename = "type")]
    pub ds_type: DataSourceType,
    /// Display name, unique across configured instances.
    pub name: String,
    /// Query access mode.
    pub access: DataSourceAccess,
    /// Query url (proxy path for proxied instances).
    pub url: String,
    /// Plugin-specific settings, shape owned by the plugin.
    pub json_data: serde_json::Value,
    /// Metadata of the backing plugin.
    pub meta: PluginMeta,
    /// Whether the instance is provisioned read-only.
    pub read_only: bool,
}
