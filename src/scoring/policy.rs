// Score range validation policy

use serde::{Deserialize, Serialize};

use crate::errors::{BrainstormError, Result};
use crate::ideas::RawScores;

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 5;

/// What to do with raw scores outside 1..=5
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreValidationPolicy {
    /// Store scores as submitted, out-of-range values included
    #[default]
    Accept,
    /// Fail the submission on the first out-of-range value
    Reject,
    /// Coerce every value into 1..=5
    Clamp,
}

impl ScoreValidationPolicy {
    pub fn apply(self, raw: RawScores) -> Result<RawScores> {
        match self {
            ScoreValidationPolicy::Accept => Ok(raw),
            ScoreValidationPolicy::Reject => {
                if let Some((criterion, score)) = raw
                    .iter()
                    .find(|(_, s)| !(MIN_SCORE..=MAX_SCORE).contains(*s))
                {
                    return Err(BrainstormError::ScoreOutOfRange {
                        criterion: criterion.clone(),
                        score: *score,
                    });
                }
                Ok(raw)
            }
            ScoreValidationPolicy::Clamp => Ok(raw
                .into_iter()
                .map(|(k, s)| (k, s.clamp(MIN_SCORE, MAX_SCORE)))
                .collect()),
        }
    }
}
