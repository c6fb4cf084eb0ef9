//! Daily oracle decrees: a deterministic decision list over wellness and duel
//! signals.

mod domain;
mod rules;

pub use domain::{
    DecreeActions, DecreeCode, DecreeContext, DecreeKind, FeatureLock, OracleDecree, Urgency,
};

use serde::{Deserialize, Serialize};

/// Thresholds feeding the decree predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    pub readiness_rest_threshold: u8,
    pub duel_rally_window_days: i64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            readiness_rest_threshold: 30,
            duel_rally_window_days: 3,
        }
    }
}

/// Deterministic decree selection over the priority rule list.
pub struct DecreeSelector {
    config: OracleConfig,
}

impl DecreeSelector {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    pub fn select(&self, context: &DecreeContext) -> OracleDecree {
        for rule in rules::PRIORITY_RULES {
            if (rule.applies)(context, &self.config) {
                return (rule.issue)(context, &self.config);
            }
        }
        rules::baseline_grind()
    }
}
