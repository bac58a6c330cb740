//! Factories for query-time rules and rule groups.

use std::collections::HashMap;

use alertmock_dto::{PromAlertingRuleState, PromRule, PromRuleGroup, PromRuleType, RuleHealth};

use crate::sequence::Sequence;

/// Number of child rules a default-built group contains.
pub const RULES_PER_GROUP: usize = 10;

/// Field overrides for [`PromRuleFactory`].
///
/// Unset fields fall back to the factory defaults; set fields take
/// precedence. Overrides never affect how far the sequence advances.
#[derive(Debug, Clone, Default)]
pub struct PromRuleOverrides {
    /// Overrides the rule name.
    pub name: Option<String>,
    /// Overrides the query expression.
    pub query: Option<String>,
    /// Overrides the evaluation state.
    pub state: Option<PromAlertingRuleState>,
    /// Overrides the rule kind.
    pub rule_type: Option<PromRuleType>,
    /// Overrides the evaluation health.
    pub health: Option<RuleHealth>,
    /// Replaces the default label set.
    pub labels: Option<HashMap<String, String>>,
}

impl PromRuleOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the query expression.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the evaluation state.
    #[must_use]
    pub const fn state(mut self, state: PromAlertingRuleState) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets the rule kind.
    #[must_use]
    pub const fn rule_type(mut self, rule_type: PromRuleType) -> Self {
        self.rule_type = Some(rule_type);
        self
    }

    /// Sets the evaluation health.
    #[must_use]
    pub const fn health(mut self, health: RuleHealth) -> Self {
        self.health = Some(health);
        self
    }

    /// Replaces the label set.
    #[must_use]
    pub fn labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }
}

/// Builds query-time rules named `test-rule-{seq}`.
#[derive(Debug, Clone, Default)]
pub struct PromRuleFactory {
    seq: Sequence,
}

impl PromRuleFactory {
    /// Creates a factory with a fresh sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule with default fields.
    pub fn build(&self) -> PromRule {
        self.build_with(PromRuleOverrides::default())
    }

    /// Builds a rule, applying the given overrides over the defaults.
    pub fn build_with(&self, overrides: PromRuleOverrides) -> PromRule {
        let seq = self.seq.next();
        PromRule {
            name: overrides.name.unwrap_or_else(|| format!("test-rule-{seq}")),
            query: overrides.query.unwrap_or_else(|| "test-query".to_string()),
            state: overrides.state.unwrap_or_default(),
            rule_type: overrides.rule_type.unwrap_or(PromRuleType::Alerting),
            health: overrides.health.unwrap_or_default(),
            labels: overrides
                .labels
                .unwrap_or_else(|| HashMap::from([("team".to_string(), "infra".to_string())])),
        }
    }

    /// Builds `count` default rules.
    pub fn build_list(&self, count: usize) -> Vec<PromRule> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the factory's sequence to its initial value.
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}

/// Field overrides for [`PromRuleGroupFactory`].
#[derive(Debug, Clone, Default)]
pub struct PromRuleGroupOverrides {
    /// Overrides the group name.
    pub name: Option<String>,
    /// Overrides the namespace (rule file).
    pub file: Option<String>,
    /// Overrides the evaluation interval in seconds.
    pub interval: Option<u64>,
    /// Replaces the generated child rules entirely.
    pub rules: Option<Vec<PromRule>>,
}

impl PromRuleGroupOverrides {
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

    /// Sets the namespace (rule file).
    #[must_use]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the evaluation interval in seconds.
    #[must_use]
    pub const fn interval(mut self, interval: u64) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Replaces the child rules.
    #[must_use]
    pub fn rules(mut self, rules: Vec<PromRule>) -> Self {
        self.rules = Some(rules);
        self
    }
}

/// Builds query-time rule groups named `test-group-{seq}`.
///
/// A default-built group holds [`RULES_PER_GROUP`] rules built through the
/// shared [`PromRuleFactory`], whose sequence is rewound after each group so
/// child numbering restarts at 1 for every group. Child names are therefore
/// unique within a group but repeat across groups.
#[derive(Debug, Clone, Default)]
pub struct PromRuleGroupFactory {
    seq: Sequence,
    rules: PromRuleFactory,
}

impl PromRuleGroupFactory {
    /// Creates a factory with a fresh sequence and its own child rule factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory whose child builds go through `rules`.
    ///
    /// Pass a clone of the rule factory exposed alongside this one so both
    /// share a sequence.
    #[must_use]
    pub fn with_rule_factory(rules: PromRuleFactory) -> Self {
        Self {
            seq: Sequence::new(),
            rules,
        }
    }

    /// Builds a group with default fields and ten freshly numbered rules.
    pub fn build(&self) -> PromRuleGroup {
        self.build_with(PromRuleGroupOverrides::default())
    }

    /// Builds a group, applying the given overrides over the defaults.
    ///
    /// When `rules` is overridden, the child builds are skipped, but the
    /// child counter is still rewound: numbering restarts at every group
    /// boundary regardless of how the group got its rules.
    pub fn build_with(&self, overrides: PromRuleGroupOverrides) -> PromRuleGroup {
        let seq = self.seq.next();

        let rules = overrides
            .rules
            .unwrap_or_else(|| self.rules.build_list(RULES_PER_GROUP));
        self.rules.rewind();

        PromRuleGroup {
            name: overrides
                .name
                .unwrap_or_else(|| format!("test-group-{seq}")),
            file: overrides
                .file
                .unwrap_or_else(|| "test-namespace".to_string()),
            interval: overrides.interval.unwrap_or(10),
            rules,
        }
    }

    /// Builds `count` default groups.
    pub fn build_list(&self, count: usize) -> Vec<PromRuleGroup> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the group sequence (child numbering is already per-group).
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_defaults_follow_sequence() {
        let factory = PromRuleFactory::new();

        let first = factory.build();
        let second = factory.build();
        let third = factory.build();

        assert_eq!(first.name, "test-rule-1");
        assert_eq!(second.name, "test-rule-2");
        assert_eq!(third.name, "test-rule-3");

        assert_eq!(first.query, "test-query");
        assert_eq!(first.state, PromAlertingRuleState::Inactive);
        assert_eq!(first.rule_type, PromRuleType::Alerting);
        assert_eq!(first.health, RuleHealth::Ok);
        assert_eq!(first.labels.get("team"), Some(&"infra".to_string()));
    }

    #[test]
    fn consecutive_default_builds_differ() {
        let factory = PromRuleFactory::new();
        assert_ne!(factory.build(), factory.build());
    }

    #[test]
    fn rule_overrides_take_precedence() {
        let factory = PromRuleFactory::new();

        let rule = factory.build_with(
            PromRuleOverrides::new()
                .name("custom")
                .state(PromAlertingRuleState::Firing)
                .health(RuleHealth::Error),
        );

        assert_eq!(rule.name, "custom");
        assert_eq!(rule.state, PromAlertingRuleState::Firing);
        assert_eq!(rule.health, RuleHealth::Error);
        // Unset fields keep defaults.
        assert_eq!(rule.query, "test-query");
    }

    #[test]
    fn overridden_build_still_advances_sequence_once() {
        let factory = PromRuleFactory::new();

        factory.build_with(PromRuleOverrides::new().name("custom"));
        let next = factory.build();

        assert_eq!(next.name, "test-rule-2");
    }

    #[test]
    fn group_contains_ten_rules_numbered_from_one() {
        let rule_factory = PromRuleFactory::new();
        let factory = PromRuleGroupFactory::with_rule_factory(rule_factory);

        let group = factory.build();

        assert_eq!(group.name, "test-group-1");
        assert_eq!(group.file, "test-namespace");
        assert_eq!(group.interval, 10);
        assert_eq!(group.rules.len(), RULES_PER_GROUP);
        assert_eq!(group.rules[0].name, "test-rule-1");
        assert_eq!(group.rules[9].name, "test-rule-10");
    }

    #[test]
    fn child_numbering_restarts_per_group() {
        let factory = PromRuleGroupFactory::new();

        let first = factory.build();
        let second = factory.build();

        assert_ne!(first.name, second.name);
        assert_eq!(first.rules[0].name, second.rules[0].name);
        assert_eq!(first.rules[9].name, second.rules[9].name);
    }

    #[test]
    fn group_rewinds_shared_rule_factory() {
        let rule_factory = PromRuleFactory::new();
        let factory = PromRuleGroupFactory::with_rule_factory(rule_factory.clone());

        factory.build();

        // The shared factory numbering restarted at the group boundary.
        assert_eq!(rule_factory.build().name, "test-rule-1");
    }

    #[test]
    fn group_rules_override_skips_child_builds() {
        let rule_factory = PromRuleFactory::new();
        let factory = PromRuleGroupFactory::with_rule_factory(rule_factory.clone());

        let group = factory.build_with(PromRuleGroupOverrides::new().rules(vec![]));

        assert!(group.rules.is_empty());
        assert_eq!(rule_factory.build().name, "test-rule-1");
    }

    #[test]
    fn group_build_rewinds_child_counter_even_with_rules_override() {
        let rule_factory = PromRuleFactory::new();
        let factory = PromRuleGroupFactory::with_rule_factory(rule_factory.clone());

        // Leave the shared counter mid-run, then build with overridden rules.
        rule_factory.build();
        rule_factory.build();
        factory.build_with(PromRuleGroupOverrides::new().rules(vec![]));

        // The group boundary rewound the counter all the same.
        assert_eq!(rule_factory.build().name, "test-rule-1");
    }

    #[test]
    fn build_list_produces_distinct_groups() {
        let factory = PromRuleGroupFactory::new();
        let groups = factory.build_list(3);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].name, "test-group-1");
        assert_eq!(groups[2].name, "test-group-3");
    }
}
