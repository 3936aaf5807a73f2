//! Stunting risk score

/// Points contributed by a height-for-age z-score below -2
pub const LOW_HEIGHT_POINTS: u8 = 60;
/// Points contributed by a weight-for-age z-score below -2
pub const LOW_WEIGHT_POINTS: u8 = 40;

const RISK_CUTOFF: f64 = -2.0;

/// Stunting risk percentage from two known scores, 0 to 100
#[must_use]
pub fn stunting_risk_score(haz: f64, waz: f64) -> u8 {
    let mut score: u8 = 0;
    if haz < RISK_CUTOFF {
        score += LOW_HEIGHT_POINTS;
    }
    if waz < RISK_CUTOFF {
        score += LOW_WEIGHT_POINTS;
    }
    score.min(100)
}

/// Stunting risk percentage; absent unless both scores are present
#[must_use]
pub fn stunting_risk_percent(haz: Option<f64>, waz: Option<f64>) -> Option<u8> {
    Some(stunting_risk_score(haz?, waz?))
}
