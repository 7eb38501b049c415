use crate::rule::{PeriodicRule, TimeOverride};
use serde::{Deserialize, Serialize};

/// One timed stage of a chemical process (e.g. "Developer", "Stop Bath").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessStep {
    /// Unique within the parent process. Empty for a step that was never saved.
    #[serde(default)]
    pub id: String,
    /// Sequencing position within the process.
    pub order: i32,
    pub label: String,
    /// Nominal duration in minutes when no rule or override applies.
    pub base_time_minutes: f64,
    /// Descriptive only, never used in timing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_max: Option<f64>,
    #[serde(default)]
    pub rules: Vec<PeriodicRule>,
    #[serde(default)]
    pub overrides: Vec<TimeOverride>,
}

/// A complete development recipe: a named, ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

impl ProcessStep {
    /// A step with no rules, overrides or temperature bounds.
    pub fn new(id: &str, order: i32, label: &str, base_time_minutes: f64) -> Self {
        Self {
            id: id.to_string(),
            order,
            label: label.to_string(),
            base_time_minutes,
            temperature_min: None,
            temperature_max: None,
            rules: Vec::new(),
            overrides: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: PeriodicRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_override(mut self, time_override: TimeOverride) -> Self {
        self.overrides.push(time_override);
        self
    }

    pub fn with_temperature(mut self, min: f64, max: f64) -> Self {
        self.temperature_min = Some(min);
        self.temperature_max = Some(max);
        self
    }

    /// The only rule the resolver consults.
    pub fn first_rule(&self) -> Option<&PeriodicRule> {
        self.rules.first()
    }
}

impl Process {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            steps: Vec::new(),
        }
    }

    pub fn with_step(mut self, step: ProcessStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Steps sorted by `order`. Steps sharing an order keep their stored order.
    pub fn ordered_steps(&self) -> Vec<&ProcessStep> {
        let mut steps: Vec<&ProcessStep> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        steps
    }
}
