use serde::{Deserialize, Serialize};

/// Contribution of a single period to a weighted score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodScore {
    pub period: u64, // 1-based, matches the weight
    pub score: f64,
    pub weight: u64,
    pub weighted_value: f64,
}

/// Full working of a weighted score, used to show how a final score was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub final_score: f64,
    pub breakdown: Vec<PeriodScore>,
    pub weighted_sum: f64,
    pub weight_sum: u64,
}

impl ScoreBreakdown {
    pub fn empty() -> Self {
        Self {
            final_score: 0.0,
            breakdown: Vec::new(),
            weighted_sum: 0.0,
            weight_sum: 0,
        }
    }
}
