//! Alerting rule value types.
//!
//! Two families of shapes mirror the upstream dashboard API:
//! - Query-time rules ([`PromRule`], [`PromRuleGroup`]) as returned by the
//!   rules endpoint of a Prometheus-compatible backend.
//! - Stored (ruler) rules ([`RulerAlertingRule`], [`RulerRecordingRule`],
//!   [`RulerRuleGroup`], [`GrafanaRecordingRule`]) as persisted in rule
//!   configuration.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::duration::PromDuration;

/// The evaluation state of a query-time alerting rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromAlertingRuleState {
    /// The rule condition is not met.
    #[default]
    Inactive,
    /// The condition is met but has not held long enough to fire.
    Pending,
    /// The rule is actively firing.
    Firing,
}

impl PromAlertingRuleState {
    /// Returns the state as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Firing => "firing",
        }
    }
}

impl fmt::Display for PromAlertingRuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of a query-time rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromRuleType {
    /// A rule that fires alerts.
    Alerting,
    /// A rule that records a derived series.
    Recording,
}

impl PromRuleType {
    /// Returns the rule type as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alerting => "alerting",
            Self::Recording => "recording",
        }
    }
}

impl fmt::Display for PromRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The evaluation health of a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleHealth {
    /// The rule evaluates cleanly.
    #[default]
    #[serde(rename = "ok")]
    Ok,
    /// The last evaluation errored.
    #[serde(rename = "err")]
    Error,
    /// The last evaluation returned no data.
    #[serde(rename = "nodata")]
    NoData,
    /// Health has not been determined yet.
    #[serde(rename = "unknown")]
    Unknown,
}

impl RuleHealth {
    /// Returns the health as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "err",
            Self::NoData => "nodata",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RuleHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A query-time alerting rule as returned by the rules endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromRule {
    /// Rule name.
    pub name: String,
    /// The query expression the rule evaluates.
    pub query: String,
    /// Current evaluation state.
    pub state: PromAlertingRuleState,
    /// Whether this is an alerting or recording rule.
    #[serde(rename = "type")]
    pub rule_type: PromRuleType,
    /// Evaluation health.
    pub health: RuleHealth,
    /// Labels attached to the rule.
    pub labels: HashMap<String, String>,
}

/// A query-time rule group: rules evaluated together on a shared interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromRuleGroup {
    /// Group name.
    pub name: String,
    /// The namespace (rule file) the group belongs to.
    pub file: String,
    /// Evaluation interval in seconds.
    pub interval: u64,
    /// Rules in evaluation order.
    pub rules: Vec<PromRule>,
}

/// A stored alerting rule as persisted in ruler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerAlertingRule {
    /// Alert name.
    pub alert: String,
    /// The alerting expression.
    pub expr: String,
    /// Annotations attached to fired alerts.
    pub annotations: HashMap<String, String>,
    /// Labels attached to fired alerts.
    pub labels: HashMap<String, String>,
    /// How long the condition must hold before the alert fires.
    #[serde(rename = "for")]
    pub pending_period: PromDuration,
}

/// A stored recording rule as persisted in ruler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerRecordingRule {
    /// The series name the rule records into.
    pub record: String,
    /// The recorded expression.
    pub expr: String,
    /// Labels attached to the recorded series.
    pub labels: HashMap<String, String>,
}

/// Any stored rule shape a ruler group can contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RulerRule {
    /// A dashboard-managed recording rule.
    Grafana(GrafanaRecordingRule),
    /// A stored alerting rule.
    Alerting(RulerAlertingRule),
    /// A stored recording rule.
    Recording(RulerRecordingRule),
}

/// A stored rule group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerRuleGroup {
    /// Group name.
    pub name: String,
    /// Stored rules in order.
    pub rules: Vec<RulerRule>,
    /// Evaluation interval.
    pub interval: PromDuration,
}

/// A single query in a dashboard-managed rule definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertQuery {
    /// Reference id of the query within the definition (e.g. `A`).
    #[serde(rename = "refId")]
    pub ref_id: String,
    /// Uid of the data source the query runs against.
    #[serde(rename = "datasourceUid")]
    pub datasource_uid: String,
    /// Opaque query payload, shape owned by the data source plugin.
    pub model: serde_json::Value,
}

/// The series a dashboard-managed recording rule writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTarget {
    /// The expression (by ref id or literal) the metric is recorded from.
    pub from: String,
    /// The metric name to record into.
    pub metric: String,
}

/// The identity and evaluation block of a dashboard-managed recording rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrafanaRuleDefinition {
    /// Numeric rule id, serialized as a string.
    pub id: String,
    /// Stable rule uid.
    pub uid: String,
    /// Rule title.
    pub title: String,
    /// Uid of the folder (namespace) holding the rule.
    pub namespace_uid: String,
    /// Name of the group holding the rule.
    pub rule_group: String,
    /// Ref id of the query that acts as the rule condition.
    pub condition: String,
    /// The queries backing the rule.
    pub data: Vec<AlertQuery>,
    /// The series the rule records.
    pub record: RecordTarget,
}

/// A recording rule managed by the dashboard rather than an external ruler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrafanaRecordingRule {
    /// Identity and evaluation block.
    #[serde(rename = "grafana_alert")]
    pub definition: GrafanaRuleDefinition,
    /// How long the condition must hold before evaluation acts.
    #[serde(rename = "for")]
    pub pending_period: PromDuration,
    /// Labels attached to the recorded series.
    pub labels: HashMap<String, String>,
    /// Always empty for recording rules: the wire shape carries the field
    /// even though recording rules do not support annotations.
    pub annotations: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod enum_tests {
        use super::*;

        #[test]
        fn state_as_str() {
            assert_eq!(PromAlertingRuleState::Inactive.as_str(), "inactive");
            assert_eq!(PromAlertingRuleState::Pending.as_str(), "pending");
            assert_eq!(PromAlertingRuleState::Firing.as_str(), "firing");
        }

        #[test]
        fn state_default_is_inactive() {
            assert_eq!(
                PromAlertingRuleState::default(),
                PromAlertingRuleState::Inactive
            );
        }

        #[test]
        fn rule_type_serializes_lowercase() {
            let json = serde_json::to_value(PromRuleType::Alerting).expect("serialize");
            assert_eq!(json, json!("alerting"));
        }

        #[test]
        fn health_wire_names() {
            assert_eq!(
                serde_json::to_value(RuleHealth::Error).expect("serialize"),
                json!("err")
            );
            assert_eq!(
                serde_json::to_value(RuleHealth::NoData).expect("serialize"),
                json!("nodata")
            );
        }

        #[test]
        fn enum_display() {
            assert_eq!(format!("{}", PromAlertingRuleState::Firing), "firing");
            assert_eq!(format!("{}", PromRuleType::Recording), "recording");
            assert_eq!(format!("{}", RuleHealth::Ok), "ok");
        }
    }

    mod wire_shape_tests {
        use super::*;

        fn sample_prom_rule() -> PromRule {
            PromRule {
                name: "test-rule-1".to_string(),
                query: "test-query".to_string(),
                state: PromAlertingRuleState::Inactive,
                rule_type: PromRuleType::Alerting,
                health: RuleHealth::Ok,
                labels: HashMap::from([("team".to_string(), "infra".to_string())]),
            }
        }

        #[test]
        fn prom_rule_wire_fields() {
            let value = serde_json::to_value(sample_prom_rule()).expect("serialize");
            assert_eq!(value["name"], json!("test-rule-1"));
            assert_eq!(value["type"], json!("alerting"));
            assert_eq!(value["state"], json!("inactive"));
            assert_eq!(value["health"], json!("ok"));
            assert_eq!(value["labels"]["team"], json!("infra"));
        }

        #[test]
        fn ruler_alerting_rule_uses_for() {
            let rule = RulerAlertingRule {
                alert: "ruler-alerting-rule-1".to_string(),
                expr: "vector(0)".to_string(),
                annotations: HashMap::new(),
                labels: HashMap::new(),
                pending_period: PromDuration::minutes(5),
            };
            let value = serde_json::to_value(&rule).expect("serialize");
            assert_eq!(value["for"], json!("5m"));
            assert!(value.get("pending_period").is_none());
        }

        #[test]
        fn grafana_rule_uses_grafana_alert_key() {
            let rule = GrafanaRecordingRule {
                definition: GrafanaRuleDefinition {
                    id: "1".to_string(),
                    uid: "mock-rule-uid-1".to_string(),
                    title: "Recording rule 1".to_string(),
                    namespace_uid: "test-namespace".to_string(),
                    rule_group: "test-group".to_string(),
                    condition: "A".to_string(),
                    data: vec![],
                    record: RecordTarget {
                        from: "vector(1)".to_string(),
                        metric: "recording_rule_1".to_string(),
                    },
                },
                pending_period: PromDuration::minutes(5),
                labels: HashMap::new(),
                annotations: HashMap::new(),
            };
            let value = serde_json::to_value(&rule).expect("serialize");
            assert_eq!(value["grafana_alert"]["uid"], json!("mock-rule-uid-1"));
            assert_eq!(value["grafana_alert"]["record"]["from"], json!("vector(1)"));
            assert_eq!(value["for"], json!("5m"));
        }

        #[test]
        fn ruler_rule_untagged_roundtrip() {
            let group = RulerRuleGroup {
                name: "ruler-rule-group-1".to_string(),
                rules: vec![
                    RulerRule::Alerting(RulerAlertingRule {
                        alert: "a".to_string(),
                        expr: "vector(0)".to_string(),
                        annotations: HashMap::new(),
                        labels: HashMap::new(),
                        pending_period: PromDuration::minutes(5),
                    }),
                    RulerRule::Recording(RulerRecordingRule {
                        record: "r".to_string(),
                        expr: "vector(0)".to_string(),
                        labels: HashMap::new(),
                    }),
                ],
                interval: PromDuration::minutes(1),
            };

            let json = serde_json::to_string(&group).expect("serialize");
            let parsed: RulerRuleGroup = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(parsed, group);
        }

        #[test]
        fn prom_rule_roundtrip() {
            let original = sample_prom_rule();
            let json = serde_json::to_string(&original).expect("serialize");
            let parsed: PromRule = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(parsed, original);
        }
    }
}
