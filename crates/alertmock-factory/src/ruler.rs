//! Factories for stored (ruler) rules and rule groups.

use std::collections::HashMap;

use alertmock_dto::{
    AlertQuery, GrafanaRecordingRule, GrafanaRuleDefinition, PromDuration, RecordTarget,
    RulerAlertingRule, RulerRecordingRule, RulerRule, RulerRuleGroup,
};

use crate::sequence::Sequence;

fn default_labels() -> HashMap<String, String> {
    HashMap::from([("label-key-1".to_string(), "label-value-1".to_string())])
}

/// Field overrides for [`RulerAlertingRuleFactory`].
#[derive(Debug, Clone, Default)]
pub struct RulerAlertingRuleOverrides {
    /// Overrides the alert name.
    pub alert: Option<String>,
    /// Overrides the alerting expression.
    pub expr: Option<String>,
    /// Replaces the default annotations.
    pub annotations: Option<HashMap<String, String>>,
    /// Replaces the default labels.
    pub labels: Option<HashMap<String, String>>,
    /// Overrides the pending period.
    pub pending_period: Option<PromDuration>,
}

impl RulerAlertingRuleOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alert name.
    #[must_use]
    pub fn alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    /// Sets the alerting expression.
    #[must_use]
    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    /// Replaces the annotations.
    #[must_use]
    pub fn annotations(mut self, annotations: HashMap<String, String>) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Replaces the labels.
    #[must_use]
    pub fn labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Sets the pending period.
    #[must_use]
    pub const fn pending_period(mut self, period: PromDuration) -> Self {
        self.pending_period = Some(period);
        self
    }
}

/// Builds stored alerting rules named `ruler-alerting-rule-{seq}`.
#[derive(Debug, Clone, Default)]
pub struct RulerAlertingRuleFactory {
    seq: Sequence,
}

impl RulerAlertingRuleFactory {
    /// Creates a factory with a fresh sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule with default fields.
    pub fn build(&self) -> RulerAlertingRule {
        self.build_with(RulerAlertingRuleOverrides::default())
    }

    /// Builds a rule, applying the given overrides over the defaults.
    pub fn build_with(&self, overrides: RulerAlertingRuleOverrides) -> RulerAlertingRule {
        let seq = self.seq.next();
        RulerAlertingRule {
            alert: overrides
                .alert
                .unwrap_or_else(|| format!("ruler-alerting-rule-{seq}")),
            expr: overrides.expr.unwrap_or_else(|| "vector(0)".to_string()),
            annotations: overrides.annotations.unwrap_or_else(|| {
                HashMap::from([(
                    "annotation-key-1".to_string(),
                    "annotation-value-1".to_string(),
                )])
            }),
            labels: overrides.labels.unwrap_or_else(default_labels),
            pending_period: overrides
                .pending_period
                .unwrap_or_else(|| PromDuration::minutes(5)),
        }
    }

    /// Builds `count` default rules.
    pub fn build_list(&self, count: usize) -> Vec<RulerAlertingRule> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the factory's sequence to its initial value.
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}

/// Field overrides for [`RulerRecordingRuleFactory`].
#[derive(Debug, Clone, Default)]
pub struct RulerRecordingRuleOverrides {
    /// Overrides the recorded series name.
    pub record: Option<String>,
    /// Overrides the recorded expression.
    pub expr: Option<String>,
    /// Replaces the default labels.
    pub labels: Option<HashMap<String, String>>,
}

impl RulerRecordingRuleOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recorded series name.
    #[must_use]
    pub fn record(mut self, record: impl Into<String>) -> Self {
        self.record = Some(record.into());
        self
    }

    /// Sets the recorded expression.
    #[must_use]
    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    /// Replaces the labels.
    #[must_use]
    pub fn labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }
}

/// Builds stored recording rules named `ruler-recording-rule-{seq}`.
#[derive(Debug, Clone, Default)]
pub struct RulerRecordingRuleFactory {
    seq: Sequence,
}

impl RulerRecordingRuleFactory {
    /// Creates a factory with a fresh sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule with default fields.
    pub fn build(&self) -> RulerRecordingRule {
        self.build_with(RulerRecordingRuleOverrides::default())
    }

    /// Builds a rule, applying the given overrides over the defaults.
    pub fn build_with(&self, overrides: RulerRecordingRuleOverrides) -> RulerRecordingRule {
        let seq = self.seq.next();
        RulerRecordingRule {
            record: overrides
                .record
                .unwrap_or_else(|| format!("ruler-recording-rule-{seq}")),
            expr: overrides.expr.unwrap_or_else(|| "vector(0)".to_string()),
            labels: overrides.labels.unwrap_or_else(default_labels),
        }
    }

    /// Builds `count` default rules.
    pub fn build_list(&self, count: usize) -> Vec<RulerRecordingRule> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the factory's sequence to its initial value.
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}

/// Field overrides for [`RulerRuleGroupFactory`].
#[derive(Debug, Clone, Default)]
pub struct RulerRuleGroupOverrides {
    /// Overrides the group name.
    pub name: Option<String>,
    /// Replaces the (empty) default rule list.
    pub rules: Option<Vec<RulerRule>>,
    /// Overrides the evaluation interval.
    pub interval: Option<PromDuration>,
}

impl RulerRuleGroupOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the group name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the rule list.
    #[must_use]
    pub fn rules(mut self, rules: Vec<RulerRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Sets the evaluation interval.
    #[must_use]
    pub const fn interval(mut self, interval: PromDuration) -> Self {
        self.interval = Some(interval);
        self
    }
}

/// Builds stored rule groups named `ruler-rule-group-{seq}`.
///
/// Default groups are empty; callers compose rules built through the rule
/// factories into the `rules` override.
#[derive(Debug, Clone, Default)]
pub struct RulerRuleGroupFactory {
    seq: Sequence,
}

impl RulerRuleGroupFactory {
    /// Creates a factory with a fresh sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a group with default fields and no rules.
    pub fn build(&self) -> RulerRuleGroup {
        self.build_with(RulerRuleGroupOverrides::default())
    }

    /// Builds a group, applying the given overrides over the defaults.
    pub fn build_with(&self, overrides: RulerRuleGroupOverrides) -> RulerRuleGroup {
        let seq = self.seq.next();
        RulerRuleGroup {
            name: overrides
                .name
                .unwrap_or_else(|| format!("ruler-rule-group-{seq}")),
            rules: overrides.rules.unwrap_or_default(),
            interval: overrides
                .interval
                .unwrap_or_else(|| PromDuration::minutes(1)),
        }
    }

    /// Builds `count` default groups.
    pub fn build_list(&self, count: usize) -> Vec<RulerRuleGroup> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the factory's sequence to its initial value.
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}

/// Field overrides for [`GrafanaRecordingRuleFactory`].
#[derive(Debug, Clone, Default)]
pub struct GrafanaRecordingRuleOverrides {
    /// Overrides the rule title.
    pub title: Option<String>,
    /// Overrides the rule uid.
    pub uid: Option<String>,
    /// Overrides the folder uid holding the rule.
    pub namespace_uid: Option<String>,
    /// Overrides the group name holding the rule.
    pub rule_group: Option<String>,
    /// Overrides the condition ref id.
    pub condition: Option<String>,
    /// Replaces the (empty) default query list.
    pub data: Option<Vec<AlertQuery>>,
    /// Overrides the record target.
    pub record: Option<RecordTarget>,
    /// Overrides the pending period.
    pub pending_period: Option<PromDuration>,
    /// Replaces the default labels.
    pub labels: Option<HashMap<String, String>>,
}

impl GrafanaRecordingRuleOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the rule uid.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Sets the folder uid.
    #[must_use]
    pub fn namespace_uid(mut self, namespace_uid: impl Into<String>) -> Self {
        self.namespace_uid = Some(namespace_uid.into());
        self
    }

    /// Sets the group name.
    #[must_use]
    pub fn rule_group(mut self, rule_group: impl Into<String>) -> Self {
        self.rule_group = Some(rule_group.into());
        self
    }

    /// Sets the condition ref id.
    #[must_use]
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Replaces the query list.
    #[must_use]
    pub fn data(mut self, data: Vec<AlertQuery>) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the record target.
    #[must_use]
    pub fn record(mut self, record: RecordTarget) -> Self {
        self.record = Some(record);
        self
    }

    /// Sets the pending period.
    #[must_use]
    pub const fn pending_period(mut self, period: PromDuration) -> Self {
        self.pending_period = Some(period);
        self
    }

    /// Replaces the labels.
    #[must_use]
    pub fn labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }
}

/// Builds dashboard-managed recording rules titled `Recording rule {seq}`.
///
/// Rule uids come from an independent counter so they stay unique even when
/// the main sequence is rewound.
#[derive(Debug, Clone, Default)]
pub struct GrafanaRecordingRuleFactory {
    seq: Sequence,
    uid_seq: Sequence,
}

impl GrafanaRecordingRuleFactory {
    /// Creates a factory with fresh sequence and uid counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule with default fields.
    pub fn build(&self) -> GrafanaRecordingRule {
        self.build_with(GrafanaRecordingRuleOverrides::default())
    }

    /// Builds a rule, applying the given overrides over the defaults.
    pub fn build_with(&self, overrides: GrafanaRecordingRuleOverrides) -> GrafanaRecordingRule {
        let seq = self.seq.next();
        GrafanaRecordingRule {
            definition: GrafanaRuleDefinition {
                id: seq.to_string(),
                uid: overrides
                    .uid
                    .unwrap_or_else(|| format!("mock-rule-uid-{}", self.uid_seq.next())),
                title: overrides
                    .title
                    .unwrap_or_else(|| format!("Recording rule {seq}")),
                namespace_uid: overrides
                    .namespace_uid
                    .unwrap_or_else(|| "test-namespace".to_string()),
                rule_group: overrides
                    .rule_group
                    .unwrap_or_else(|| "test-group".to_string()),
                condition: overrides.condition.unwrap_or_else(|| "A".to_string()),
                data: overrides.data.unwrap_or_default(),
                record: overrides.record.unwrap_or_else(|| RecordTarget {
                    from: "vector(1)".to_string(),
                    metric: format!("recording_rule_{seq}"),
                }),
            },
            pending_period: overrides
                .pending_period
                .unwrap_or_else(|| PromDuration::minutes(5)),
            labels: overrides.labels.unwrap_or_else(default_labels),
            // Recording rules do not support annotations; the wire shape
            // still carries the field, so it stays present and empty.
            annotations: HashMap::new(),
        }
    }

    /// Builds `count` default rules.
    pub fn build_list(&self, count: usize) -> Vec<GrafanaRecordingRule> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the main sequence; the uid counter keeps advancing.
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}
