// Idea scoring: criteria table, weighted aggregate and range policy

mod criteria;
mod engine;
mod policy;

pub use criteria::{CriteriaTable, Criterion};
pub use engine::compute_weighted;
pub use policy::{ScoreValidationPolicy, MAX_SCORE, MIN_SCORE};
