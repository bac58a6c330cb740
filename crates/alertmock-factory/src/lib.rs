//! Fixture factories producing mock alerting objects for dashboard test
//! suites.
//!
//! `alertmock-factory` builds plausible default-shaped values of the types in
//! [`alertmock_dto`] — query-time and stored alerting rules, rule groups,
//! data sources, folders — parameterized by per-factory sequence counters and
//! optional field overrides. Builds never fail; overrides are shallow-merged
//! over the defaults and are not validated.
//!
//! Counters and the data-source registry are explicit, injected state rather
//! than process globals: each test case can wire its own [`AlertingFactory`]
//! (or call [`AlertingFactory::reset`]) and stays isolated without global
//! teardown.
//!
//! # Example
//!
//! ```rust
//! use alertmock_factory::AlertingFactory;
//!
//! let factory = AlertingFactory::with_log_setup();
//!
//! let rule = factory.prometheus.rule.build();
//! assert_eq!(rule.name, "test-rule-1");
//!
//! let group = factory.prometheus.group.build();
//! assert_eq!(group.rules.len(), 10);
//!
//! let ds = factory.data_source.build();
//! assert!(factory.data_source.registry().contains(&ds.name));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod datasource;
pub mod folder;
pub mod prometheus;
pub mod registry;
pub mod ruler;
pub mod sequence;

use std::sync::Arc;

// Re-export main types at crate root
pub use datasource::{DataSourceFactory, DataSourceOverrides};
pub use folder::{FolderFactory, FolderOverrides, FolderPermissions};
pub use prometheus::{
    PromRuleFactory, PromRuleGroupFactory, PromRuleGroupOverrides, PromRuleOverrides,
    RULES_PER_GROUP,
};
pub use registry::{DataSourceRegistry, DataSourceSetup, LogSetup, RecordingSetup};
pub use ruler::{
    GrafanaRecordingRuleFactory, GrafanaRecordingRuleOverrides, RulerAlertingRuleFactory,
    RulerAlertingRuleOverrides, RulerRecordingRuleFactory, RulerRecordingRuleOverrides,
    RulerRuleGroupFactory, RulerRuleGroupOverrides,
};
pub use sequence::Sequence;

/// Factories for query-time rule shapes.
#[derive(Debug, Clone)]
pub struct PrometheusFactories {
    /// Builds query-time rules.
    pub rule: PromRuleFactory,
    /// Builds query-time rule groups; shares the rule factory's counter.
    pub group: PromRuleGroupFactory,
}

/// Factories for dashboard-managed stored rule shapes.
#[derive(Debug, Clone)]
pub struct GrafanaFactories {
    /// Builds dashboard-managed recording rules.
    pub recording_rule: GrafanaRecordingRuleFactory,
}

/// Factories for stored (ruler) rule shapes.
#[derive(Debug, Clone)]
pub struct RulerFactories {
    /// Builds stored rule groups.
    pub group: RulerRuleGroupFactory,
    /// Builds stored alerting rules.
    pub alerting_rule: RulerAlertingRuleFactory,
    /// Builds stored recording rules.
    pub recording_rule: RulerRecordingRuleFactory,
    /// Dashboard-managed rule factories.
    pub grafana: GrafanaFactories,
}

/// The full set of alerting fixture factories, wired together.
///
/// One instance per test case gives fully isolated counters and registry
/// state. The prometheus group factory shares a counter with the prometheus
/// rule factory so group builds rewind the same numbering the standalone
/// rule builds use.
#[derive(Debug, Clone)]
pub struct AlertingFactory {
    /// Builds folders.
    pub folder: FolderFactory,
    /// Query-time rule factories.
    pub prometheus: PrometheusFactories,
    /// Stored rule factories.
    pub ruler: RulerFactories,
    /// Builds data sources, registering each into the shared registry.
    pub data_source: DataSourceFactory,
}

impl AlertingFactory {
    /// Wires a factory set with fresh counters over the given registry and
    /// setup collaborator.
    #[must_use]
    pub fn new(registry: DataSourceRegistry, setup: Arc<dyn DataSourceSetup>) -> Self {
        let rule = PromRuleFactory::new();
        let group = PromRuleGroupFactory::with_rule_factory(rule.clone());

        Self {
            folder: FolderFactory::new(),
            prometheus: PrometheusFactories { rule, group },
            ruler: RulerFactories {
                group: RulerRuleGroupFactory::new(),
                alerting_rule: RulerAlertingRuleFactory::new(),
                recording_rule: RulerRecordingRuleFactory::new(),
                grafana: GrafanaFactories {
                    recording_rule: GrafanaRecordingRuleFactory::new(),
                },
            },
            data_source: DataSourceFactory::new(registry, setup),
        }
    }

    /// Wires a factory set over a fresh registry and the logging setup
    /// collaborator.
    #[must_use]
    pub fn with_log_setup() -> Self {
        Self::new(DataSourceRegistry::new(), Arc::new(LogSetup))
    }

    /// Rewinds every factory's counter and clears the data-source registry.
    pub fn reset(&self) {
        self.folder.rewind();
        self.prometheus.rule.rewind();
        self.prometheus.group.rewind();
        self.ruler.group.rewind();
        self.ruler.alerting_rule.rewind();
        self.ruler.recording_rule.rewind();
        self.ruler.grafana.recording_rule.rewind();
        self.data_source.rewind();
        self.data_source.registry().clear();
    }
}

impl Default for AlertingFactory {
    fn default() -> Self {
        Self::with_log_setup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_builds_rewind_the_shared_rule_counter() {
        let factory = AlertingFactory::with_log_setup();

        // Consume part of the rule numbering, then build a group.
        factory.prometheus.rule.build();
        factory.prometheus.rule.build();
        factory.prometheus.group.build();

        // Group boundary rewound the shared counter.
        assert_eq!(factory.prometheus.rule.build().name, "test-rule-1");
    }

    #[test]
    fn reset_restarts_every_counter() {
        let factory = AlertingFactory::with_log_setup();

        factory.folder.build();
        factory.prometheus.rule.build();
        factory.ruler.alerting_rule.build();
        factory.data_source.build();
        assert!(!factory.data_source.registry().is_empty());

        factory.reset();

        assert_eq!(factory.prometheus.rule.build().name, "test-rule-1");
        assert_eq!(
            factory.ruler.alerting_rule.build().alert,
            "ruler-alerting-rule-1"
        );
        assert_eq!(factory.folder.build().id, 1);
        assert_eq!(factory.data_source.build().uid, "mock-ds-1");
        // Registry was cleared; only the post-reset build remains.
        assert_eq!(factory.data_source.registry().len(), 1);
    }

    #[test]
    fn instances_are_isolated_from_each_other() {
        let first = AlertingFactory::with_log_setup();
        let second = AlertingFactory::with_log_setup();

        first.prometheus.rule.build();
        first.data_source.build();

        assert_eq!(second.prometheus.rule.build().name, "test-rule-1");
        assert!(second.data_source.registry().is_empty());
    }
}
