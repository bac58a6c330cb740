//! Data-source registry and the setup collaborator it feeds.
//!
//! The data-source factory writes every built instance into a shared
//! [`DataSourceRegistry`] and hands the full registry snapshot to a
//! [`DataSourceSetup`] collaborator after each build. Both are explicit,
//! injected handles rather than process globals, so test cases can isolate
//! themselves by constructing fresh ones.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use alertmock_dto::DataSourceInstanceSettings;
use parking_lot::RwLock;
use tracing::debug;

/// A name-keyed registry of configured data-source instances.
///
/// Cloneable handle; clones share the underlying map. Snapshots are
/// name-ordered so fixture assertions are deterministic.
#[derive(Debug, Clone, Default)]
pub struct DataSourceRegistry {
    sources: Arc<RwLock<BTreeMap<String, DataSourceInstanceSettings>>>,
}

impl DataSourceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a data source, overwriting any previous entry with that name.
    pub fn insert(&self, ds: DataSourceInstanceSettings) {
        debug!(name = %ds.name, uid = %ds.uid, "registered mock data source");
        self.sources.write().insert(ds.name.clone(), ds);
    }

    /// Returns the data source registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<DataSourceInstanceSettings> {
        self.sources.read().get(name).cloned()
    }

    /// Returns true if a data source is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sources.read().contains_key(name)
    }

    /// Returns all registered data sources, ordered by name.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DataSourceInstanceSettings> {
        self.sources.read().values().cloned().collect()
    }

    /// Returns the number of registered data sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.read().len()
    }

    /// Returns true if no data sources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.read().is_empty()
    }

    /// Removes all registered data sources.
    pub fn clear(&self) {
        self.sources.write().clear();
    }
}

/// Applies the current data-source set to the test environment.
///
/// Implement this trait to back data-source resolution in whatever runtime
/// the tests exercise. The factory calls [`apply`](Self::apply) with the full
/// registry snapshot after every single build, never batched.
pub trait DataSourceSetup: Send + Sync + fmt::Debug {
    /// Applies the given data sources to the environment.
    fn apply(&self, data_sources: &[DataSourceInstanceSettings]);
}

/// A setup collaborator that only logs what it is handed.
///
/// Useful as a default when a test does not care about the applied set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSetup;

impl DataSourceSetup for LogSetup {
    fn apply(&self, data_sources: &[DataSourceInstanceSettings]) {
        debug!(count = data_sources.len(), "applied mock data sources");
    }
}

/// A setup collaborator that captures every snapshot it is handed.
///
/// Lets tests assert that the factory applies the registry after each build.
#[derive(Debug, Clone, Default)]
pub struct RecordingSetup {
    applied: Arc<RwLock<Vec<Vec<DataSourceInstanceSettings>>>>,
}

impl RecordingSetup {
    /// Creates a collaborator with no captured snapshots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of times `apply` was called.
    #[must_use]
    pub fn apply_count(&self) -> usize {
        self.applied.read().len()
    }

    /// Returns the snapshot passed to the most recent `apply` call.
    #[must_use]
    pub fn last_applied(&self) -> Option<Vec<DataSourceInstanceSettings>> {
        self.applied.read().last().cloned()
    }

    /// Returns every captured snapshot in call order.
    #[must_use]
    pub fn all_applied(&self) -> Vec<Vec<DataSourceInstanceSettings>> {
        self.applied.read().clone()
    }
}

impl DataSourceSetup for RecordingSetup {
    fn apply(&self, data_sources: &[DataSourceInstanceSettings]) {
        self.applied.write().push(data_sources.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertmock_dto::{
        DataSourceAccess, DataSourceType, PluginAuthor, PluginInfo, PluginLogos, PluginMeta,
    };
    use serde_json::json;

    fn settings(name: &str) -> DataSourceInstanceSettings {
        DataSourceInstanceSettings {
            id: 1,
            uid: format!("uid-{name}"),
            ds_type: DataSourceType::Prometheus,
            name: name.to_string(),
            access: DataSourceAccess::Proxy,
            url: String::new(),
            json_data: json!({}),
            meta: PluginMeta {
                id: "prometheus".to_string(),
                name: "Prometheus".to_string(),
                plugin_type: "datasource".to_string(),
                base_url: String::new(),
                module: String::new(),
                info: PluginInfo {
                    author: PluginAuthor {
                        name: String::new(),
                    },
                    description: String::new(),
                    updated: String::new(),
                    version: String::new(),
                    logos: PluginLogos {
                        small: String::new(),
                        large: String::new(),
                    },
                    links: vec![],
                    screenshots: vec![],
                },
            },
            read_only: false,
        }
    }

    #[test]
    fn insert_and_get() {
        let registry = DataSourceRegistry::new();
        assert!(registry.is_empty());

        registry.insert(settings("Prometheus-1"));

        assert!(registry.contains("Prometheus-1"));
        assert!(!registry.contains("Prometheus-2"));
        assert_eq!(registry.len(), 1);

        let entry = registry.get("Prometheus-1").expect("registered");
        assert_eq!(entry.uid, "uid-Prometheus-1");
    }

    #[test]
    fn insert_overwrites_same_name() {
        let registry = DataSourceRegistry::new();

        let mut first = settings("Prometheus-1");
        first.id = 1;
        let mut second = settings("Prometheus-1");
        second.id = 2;

        registry.insert(first);
        registry.insert(second);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Prometheus-1").expect("registered").id, 2);
    }

    #[test]
    fn snapshot_is_name_ordered() {
        let registry = DataSourceRegistry::new();
        registry.insert(settings("b"));
        registry.insert(settings("a"));
        registry.insert(settings("c"));

        let names: Vec<String> = registry.snapshot().into_iter().map(|ds| ds.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn clones_share_state() {
        let registry = DataSourceRegistry::new();
        let other = registry.clone();

        registry.insert(settings("shared"));
        assert!(other.contains("shared"));

        other.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn recording_setup_captures_snapshots() {
        let setup = RecordingSetup::new();
        assert_eq!(setup.apply_count(), 0);
        assert!(setup.last_applied().is_none());

        setup.apply(&[settings("a")]);
        setup.apply(&[settings("a"), settings("b")]);

        assert_eq!(setup.apply_count(), 2);
        let last = setup.last_applied().expect("applied");
        assert_eq!(last.len(), 2);
        assert_eq!(setup.all_applied()[0].len(), 1);
    }
}
