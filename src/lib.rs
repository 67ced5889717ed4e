// Library crate for the fantasy player ranking core
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod league;
pub mod player;
pub mod ranking;
pub mod roster;
pub mod scoring;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use league::{InMemoryLeagueRepository, League, LeagueId, LeagueKind, LeagueRepository};
pub use player::{InMemoryPlayerRepository, NewPlayer, Player, PlayerRepository, PlayerUpdate};
pub use ranking::{RankedPlayer, RankingService};
pub use scoring::{calculate_weighted_score, calculate_weighted_score_detailed, ScoreBreakdown};
pub use shared::{AppError, AppState};
