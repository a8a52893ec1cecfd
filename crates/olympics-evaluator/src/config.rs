use serde::{Deserialize, Serialize};

/// Tunable thresholds of the per-game evaluators.
///
/// Every field has a default, so a configuration file only needs to name the
/// values it overrides:
///
/// ```
/// use olympics_evaluator::config::EvaluatorConfig;
///
/// let config: EvaluatorConfig = serde_json::from_str(r#"{ "diving_priority_turns": 6 }"#).unwrap();
/// assert_eq!(config.diving_priority_turns, 6);
/// assert_eq!(config.skating_risk_threshold, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluatorConfig {
    /// Diving demands priority once this many combo letters or fewer remain.
    pub diving_priority_turns: usize,
    /// Combined skating risk at which the safest letter is played.
    pub skating_risk_threshold: i32,
    /// Risk added when a rival shares our skating cell modulo 10.
    pub skating_collision_risk: i32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            diving_priority_turns: 4,
            skating_risk_threshold: 3,
            skating_collision_risk: 2,
        }
    }
}
