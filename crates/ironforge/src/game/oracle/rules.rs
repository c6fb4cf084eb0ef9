use super::domain::{
    DecreeActions, DecreeCode, DecreeContext, DecreeKind, FeatureLock, OracleDecree, Urgency,
};
use super::OracleConfig;

/// One row of the decision list: `applies` gates, `issue` builds the decree.
pub(crate) struct DecreeRule {
    pub(crate) applies: fn(&DecreeContext, &OracleConfig) -> bool,
    pub(crate) issue: fn(&DecreeContext, &OracleConfig) -> OracleDecree,
}

/// Priority order is the entire algorithm: rules are evaluated top to bottom
/// and the first match wins. A new rule is inserted at the position matching
/// its priority, nothing else changes.
pub(crate) const PRIORITY_RULES: &[DecreeRule] = &[
    DecreeRule {
        applies: injury_applies,
        issue: injury_preservation,
    },
    DecreeRule {
        applies: rest_applies,
        issue: rest_forced,
    },
    DecreeRule {
        applies: rally_applies,
        issue: pvp_rally,
    },
];

fn injury_applies(context: &DecreeContext, _config: &OracleConfig) -> bool {
    context.is_injured
}

fn injury_preservation(_context: &DecreeContext, _config: &OracleConfig) -> OracleDecree {
    OracleDecree {
        code: DecreeCode::InjuryPreservation,
        kind: DecreeKind::Debuff,
        label: "Decree of Preservation".to_string(),
        description: "An injury is flagged. Heavy lifts are sealed until it mends.".to_string(),
        actions: DecreeActions {
            lock_features: vec![FeatureLock::HeavyLifts],
            urgency: Some(Urgency::High),
            notify_user: true,
        },
    }
}

fn rest_applies(context: &DecreeContext, config: &OracleConfig) -> bool {
    context.readiness < config.readiness_rest_threshold
}

fn rest_forced(context: &DecreeContext, config: &OracleConfig) -> OracleDecree {
    OracleDecree {
        code: DecreeCode::RestForced,
        kind: DecreeKind::Debuff,
        label: "Decree of Enforced Rest".to_string(),
        description: format!(
            "Readiness {} is below the {} threshold. The forge stays cold today.",
            context.readiness, config.readiness_rest_threshold
        ),
        actions: DecreeActions {
            lock_features: vec![FeatureLock::HeavyLifts],
            urgency: Some(Urgency::Medium),
            notify_user: false,
        },
    }
}

fn rally_applies(context: &DecreeContext, config: &OracleConfig) -> bool {
    matches!(
        context.days_until_duel,
        Some(days) if (0..=config.duel_rally_window_days).contains(&days)
    )
}

fn pvp_rally(context: &DecreeContext, _config: &OracleConfig) -> OracleDecree {
    let days = context.days_until_duel.unwrap_or_default();
    OracleDecree {
        code: DecreeCode::PvpRally,
        kind: DecreeKind::Buff,
        label: "Decree of the Rally".to_string(),
        description: format!("A duel deadline lands in {days} day(s). Sharpen your edge."),
        actions: DecreeActions {
            lock_features: Vec::new(),
            urgency: Some(Urgency::Medium),
            notify_user: true,
        },
    }
}

pub(crate) fn baseline_grind() -> OracleDecree {
    OracleDecree {
        code: DecreeCode::BaselineGrind,
        kind: DecreeKind::Neutral,
        label: "Decree of the Grind".to_string(),
        description: "No special omens. Train as planned.".to_string(),
        actions: DecreeActions::default(),
    }
}
