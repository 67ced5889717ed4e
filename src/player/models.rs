use serde::{Deserialize, Serialize};
use std::fmt;

use crate::league::LeagueId;
use crate::scoring::{calculate_weighted_score, calculate_weighted_score_detailed, ScoreBreakdown};

/// A ranked competitor and its per-period scores
///
/// Scores are ordered oldest first; new periods are appended at the end.
/// The final score is always derived from `scores` and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub position: String,
    pub scores: Vec<f64>,
    #[serde(default)]
    pub is_on_my_team: bool,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
        scores: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            position: position.into(),
            scores,
            is_on_my_team: false,
            league_id: None,
        }
    }

    pub fn on_my_team(mut self, on_my_team: bool) -> Self {
        self.is_on_my_team = on_my_team;
        self
    }

    pub fn in_league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    /// Recency-weighted average of the player's scores
    pub fn final_score(&self) -> f64 {
        calculate_weighted_score(&self.scores)
    }

    pub fn score_breakdown(&self) -> ScoreBreakdown {
        calculate_weighted_score_detailed(&self.scores)
    }

    /// Check if this player is the one identified by (name, league)
    pub fn is(&self, name: &str, league_id: Option<LeagueId>) -> bool {
        self.name == name && self.league_id == league_id
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_on_my_team {
            "my team"
        } else {
            "available"
        };
        write!(
            f,
            "{} ({}, {}) {:.2} [{}]",
            self.name,
            self.team,
            self.position,
            self.final_score(),
            status
        )
    }
}
