//! Data-source factory.
//!
//! The only side-effecting factory: every build registers the instance in
//! the shared [`DataSourceRegistry`] and re-applies the full registry through
//! the [`DataSourceSetup`] collaborator, once per build.

use std::fmt;
use std::sync::Arc;

use alertmock_dto::{
    DataSourceAccess, DataSourceInstanceSettings, DataSourceType, PluginAuthor, PluginInfo,
    PluginLogos, PluginMeta,
};
use serde_json::json;

use crate::registry::{DataSourceRegistry, DataSourceSetup};
use crate::sequence::Sequence;

const PROMETHEUS_LOGO: &str = "https://prometheus.io/assets/prometheus_logo_grey.svg";

/// Field overrides for [`DataSourceFactory`].
///
/// Overriding `uid` retargets the derived `name` and `url` as well, unless
/// those are themselves overridden.
#[derive(Debug, Clone, Default)]
pub struct DataSourceOverrides {
    /// Overrides the numeric instance id.
    pub id: Option<i64>,
    /// Overrides the instance uid.
    pub uid: Option<String>,
    /// Overrides the type tag.
    pub ds_type: Option<DataSourceType>,
    /// Overrides the display name.
    pub name: Option<String>,
    /// Overrides the access mode.
    pub access: Option<DataSourceAccess>,
    /// Overrides the query url.
    pub url: Option<String>,
    /// Overrides the plugin-specific settings payload.
    pub json_data: Option<serde_json::Value>,
    /// Replaces the default Prometheus plugin metadata block.
    pub meta: Option<PluginMeta>,
    /// Overrides the read-only flag.
    pub read_only: Option<bool>,
}

impl DataSourceOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the numeric instance id.
    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the instance uid.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Sets the type tag.
    #[must_use]
    pub const fn ds_type(mut self, ds_type: DataSourceType) -> Self {
        self.ds_type = Some(ds_type);
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the access mode.
    #[must_use]
    pub const fn access(mut self, access: DataSourceAccess) -> Self {
        self.access = Some(access);
        self
    }

    /// Sets the query url.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the plugin-specific settings payload.
    #[must_use]
    pub fn json_data(mut self, json_data: serde_json::Value) -> Self {
        self.json_data = Some(json_data);
        self
    }

    /// Replaces the plugin metadata block.
    #[must_use]
    pub fn meta(mut self, meta: PluginMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Sets the read-only flag.
    #[must_use]
    pub const fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }
}

/// Builds data-source instances with uid `mock-ds-{seq}` and registers each
/// one into the shared registry.
#[derive(Clone)]
pub struct DataSourceFactory {
    seq: Sequence,
    registry: DataSourceRegistry,
    setup: Arc<dyn DataSourceSetup>,
}

impl fmt::Debug for DataSourceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceFactory")
            .field("seq", &self.seq)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl DataSourceFactory {
    /// Creates a factory writing into `registry` and applying through `setup`.
    #[must_use]
    pub fn new(registry: DataSourceRegistry, setup: Arc<dyn DataSourceSetup>) -> Self {
        Self {
            seq: Sequence::new(),
            registry,
            setup,
        }
    }

    /// Returns the registry this factory writes into.
    #[must_use]
    pub fn registry(&self) -> &DataSourceRegistry {
        &self.registry
    }

    /// Builds a data source with default fields, registers it, and applies
    /// the updated registry.
    pub fn build(&self) -> DataSourceInstanceSettings {
        self.build_with(DataSourceOverrides::default())
    }

    /// Builds a data source applying the given overrides, registers it, and
    /// applies the updated registry.
    pub fn build_with(&self, overrides: DataSourceOverrides) -> DataSourceInstanceSettings {
        let seq = self.seq.next();
        let uid = overrides.uid.unwrap_or_else(|| format!("mock-ds-{seq}"));

        let ds = DataSourceInstanceSettings {
            id: overrides
                .id
                .unwrap_or_else(|| i64::try_from(seq).unwrap_or(i64::MAX)),
            name: overrides.name.unwrap_or_else(|| format!("Prometheus-{uid}")),
            url: overrides
                .url
                .unwrap_or_else(|| format!("/api/datasources/proxy/uid/{uid}")),
            uid,
            ds_type: overrides.ds_type.unwrap_or(DataSourceType::Prometheus),
            access: overrides.access.unwrap_or_default(),
            json_data: overrides.json_data.unwrap_or_else(|| json!({})),
            meta: overrides.meta.unwrap_or_else(prometheus_plugin_meta),
            read_only: overrides.read_only.unwrap_or(false),
        };

        self.registry.insert(ds.clone());
        self.setup.apply(&self.registry.snapshot());

        ds
    }

    /// Builds `count` default data sources, registering and applying each.
    pub fn build_list(&self, count: usize) -> Vec<DataSourceInstanceSettings> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the factory's sequence to its initial value.
    ///
    /// The registry is left untouched; clear it through
    /// [`registry`](Self::registry) when a test needs a clean slate.
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}

fn prometheus_plugin_meta() -> PluginMeta {
    PluginMeta {
        id: "prometheus".to_string(),
        name: "Prometheus".to_string(),
        plugin_type: "datasource".to_string(),
        base_url: "public/app/plugins/datasource/prometheus".to_string(),
        module: "core:plugin/prometheus".to_string(),
        info: PluginInfo {
            author: PluginAuthor {
                name: "Grafana Labs".to_string(),
            },
            description: "Open source time series database & alerting".to_string(),
            updated: String::new(),
            version: String::new(),
            logos: PluginLogos {
                small: PROMETHEUS_LOGO.to_string(),
                large: PROMETHEUS_LOGO.to_string(),
            },
            links: vec![],
            screenshots: vec![],
        },
    }
}
