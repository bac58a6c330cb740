//! Alerting domain value types for the alertmock fixture factories.
//!
//! `alertmock-dto` defines the plain value shapes the mock factories in
//! `alertmock-factory` produce: query-time and stored alerting rules, rule
//! groups, data-source instance settings, and dashboard folders. Serde wire
//! shapes match the upstream dashboard JSON API (`for` for pending periods,
//! `type` tags, camelCase data-source and folder fields).
//!
//! # Example
//!
//! ```rust
//! use alertmock_dto::{PromDuration, RulerAlertingRule};
//! use std::collections::HashMap;
//!
//! let rule = RulerAlertingRule {
//!     alert: "HighErrorRate".to_string(),
//!     expr: "vector(0)".to_string(),
//!     annotations: HashMap::new(),
//!     labels: HashMap::new(),
//!     pending_period: "5m".parse().unwrap(),
//! };
//!
//! let json = serde_json::to_value(&rule).unwrap();
//! assert_eq!(json["for"], "5m");
//! assert_eq!(rule.pending_period, PromDuration::minutes(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod datasource;
pub mod duration;
pub mod error;
pub mod folder;
pub mod rules;

// Re-export main types at crate root
pub use datasource::{
    DataSourceAccess, DataSourceInstanceSettings, DataSourceType, PluginAuthor, PluginInfo,
    PluginLink, PluginLogos, PluginMeta, PluginScreenshot,
};
pub use duration::PromDuration;
pub use error::{DtoError, Result};
pub use folder::Folder;
pub use rules::{
    AlertQuery, GrafanaRecordingRule, GrafanaRuleDefinition, PromAlertingRuleState, PromRule,
    PromRuleGroup, PromRuleType, RecordTarget, RuleHealth, RulerAlertingRule, RulerRecordingRule,
    RulerRule, RulerRuleGroup,
};
