use serde::Serialize;

/// Signals assembled for the day's decree. Collaborators own the raw data;
/// the selector only reads this snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecreeContext {
    /// Readiness score 0..=100 from the wellness integration.
    pub readiness: u8,
    pub is_injured: bool,
    /// Days until the nearest active duel deadline, if any.
    pub days_until_duel: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecreeCode {
    InjuryPreservation,
    RestForced,
    PvpRally,
    BaselineGrind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecreeKind {
    Buff,
    Debuff,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureLock {
    HeavyLifts,
}

/// Side effects the glue layer applies when a decree lands.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DecreeActions {
    pub lock_features: Vec<FeatureLock>,
    pub urgency: Option<Urgency>,
    pub notify_user: bool,
}

/// One daily directive nudging the titan's behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleDecree {
    pub code: DecreeCode,
    pub kind: DecreeKind,
    pub label: String,
    pub description: String,
    pub actions: DecreeActions,
}
