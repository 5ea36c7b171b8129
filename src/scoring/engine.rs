// Weighted score computation

use super::CriteriaTable;
use crate::ideas::RawScores;

/// Weighted aggregate of raw scores, rounded to one decimal place.
///
/// Only keys present in both `raw` and `criteria` contribute; unknown keys are
/// ignored. Rounding is half-up on the value scaled by ten. No clamping is
/// applied here, range policy lives in [`super::ScoreValidationPolicy`].
pub fn compute_weighted(raw: &RawScores, criteria: &CriteriaTable) -> f64 {
    let total: f64 = raw
        .iter()
        .filter_map(|(key, score)| criteria.weight(key).map(|w| *score as f64 * w))
        .sum();
    round_one_decimal(total)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
