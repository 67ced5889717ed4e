use serde::{Deserialize, Serialize};

use crate::league::LeagueDescriptor;
use crate::player::Player;
use crate::scoring::ScoreBreakdown;

/// A player together with its final score at the time of ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub final_score: f64,
    #[serde(default)]
    pub league: Option<LeagueDescriptor>,
}

impl RankedPlayer {
    pub fn new(player: Player) -> Self {
        let final_score = player.final_score();
        Self {
            player,
            final_score,
            league: None,
        }
    }

    pub fn with_league(mut self, league: Option<LeagueDescriptor>) -> Self {
        self.league = league;
        self
    }

    pub fn name(&self) -> &str {
        &self.player.name
    }
}

/// Players sharing a key, best first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGroup<K> {
    pub key: K,
    pub players: Vec<RankedPlayer>,
}

/// Players split by roster membership, each half best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSplit {
    pub my_team: Vec<RankedPlayer>,
    pub available: Vec<RankedPlayer>,
}

/// A single player with the working behind its final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetail {
    pub player: RankedPlayer,
    pub calculation: ScoreBreakdown,
}

/// Headline figures for one league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub league: LeagueDescriptor,
    pub player_count: usize,
    pub leader: Option<RankedPlayer>,
}
