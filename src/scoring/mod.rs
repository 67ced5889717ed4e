pub mod models;
mod weighted;

pub use models::{PeriodScore, ScoreBreakdown};
pub use weighted::{calculate_weighted_score, calculate_weighted_score_detailed};
