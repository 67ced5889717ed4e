use super::models::{PeriodScore, ScoreBreakdown};

/// Recency-weighted average of a score sequence.
///
/// The score at index `i` carries weight `i + 1`, so the last (most recent)
/// period counts the most. Products are summed left to right in input order
/// and divided by the triangular number `n(n+1)/2`. An empty sequence scores
/// exactly `0.0`.
pub fn calculate_weighted_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    weighted_sum(scores) / weight_sum(scores.len()) as f64
}

/// Same result as [`calculate_weighted_score`], along with every period's
/// contribution and the two sums used in the final division.
pub fn calculate_weighted_score_detailed(scores: &[f64]) -> ScoreBreakdown {
    if scores.is_empty() {
        return ScoreBreakdown::empty();
    }

    let breakdown: Vec<PeriodScore> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| {
            let weight = index as u64 + 1;
            PeriodScore {
                period: weight,
                score,
                weight,
                weighted_value: score * weight as f64,
            }
        })
        .collect();

    let weighted_sum = weighted_sum(scores);
    let weight_sum = weight_sum(scores.len());

    ScoreBreakdown {
        final_score: weighted_sum / weight_sum as f64,
        breakdown,
        weighted_sum,
        weight_sum,
    }
}

fn weighted_sum(scores: &[f64]) -> f64 {
    scores
        .iter()
        .enumerate()
        .fold(0.0, |acc, (index, &score)| acc + score * (index as u64 + 1) as f64)
}

fn weight_sum(len: usize) -> u64 {
    let n = len as u64;
    n * (n + 1) / 2
}
