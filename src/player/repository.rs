use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::input::PlayerUpdate;
use super::models::Player;
use crate::league::LeagueId;
use crate::shared::AppError;

/// Trait for player storage operations
///
/// A player is identified by `(name, league_id)`. List operations return
/// players in insertion order, which ranking relies on to break ties.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn add_player(&self, player: &Player) -> Result<(), AppError>;
    async fn get_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Option<Player>, AppError>;

    /// Players of one league, or of every league when `league_id` is `None`
    async fn list_players(&self, league_id: Option<LeagueId>) -> Result<Vec<Player>, AppError>;
    async fn list_by_team(
        &self,
        team: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Player>, AppError>;
    async fn list_by_position(
        &self,
        position: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Player>, AppError>;
    async fn list_by_roster_flag(
        &self,
        is_on_my_team: bool,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Player>, AppError>;

    async fn update_scores(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
        scores: Vec<f64>,
    ) -> Result<bool, AppError>;

    /// Replaces name, team, position and scores. Fails if the new name is taken in the league.
    async fn update_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
        update: &PlayerUpdate,
    ) -> Result<bool, AppError>;

    /// Flips the roster flag, returning the new value if the player exists
    async fn toggle_my_team(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Option<bool>, AppError>;

    async fn delete_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<bool, AppError>;

    /// Deletes every player in a league (or everywhere), returning how many were removed
    async fn delete_all(&self, league_id: Option<LeagueId>) -> Result<usize, AppError>;

    /// Player counts per league in first-seen order
    async fn count_by_league(&self) -> Result<Vec<(Option<LeagueId>, usize)>, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<Vec<Player>>,
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: RwLock::new(Vec::new()),
        }
    }

    async fn list_where<F>(&self, league_id: Option<LeagueId>, predicate: F) -> Vec<Player>
    where
        F: Fn(&Player) -> bool + Send,
    {
        let players = self.players.read().await;
        players
            .iter()
            .filter(|&p| in_scope(p, league_id) && predicate(p))
            .cloned()
            .collect()
    }
}

fn in_scope(player: &Player, league_id: Option<LeagueId>) -> bool {
    league_id.is_none() || player.league_id == league_id
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player), fields(name = %player.name, league_id = ?player.league_id))]
    async fn add_player(&self, player: &Player) -> Result<(), AppError> {
        let mut players = self.players.write().await;
        if players.iter().any(|p| p.is(&player.name, player.league_id)) {
            warn!("Player already exists");
            return Err(AppError::AlreadyExists(format!("player {}", player.name)));
        }

        players.push(player.clone());
        debug!(total = players.len(), "Player stored");
        Ok(())
    }

    async fn get_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Option<Player>, AppError> {
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.is(name, league_id)).cloned())
    }

    async fn list_players(&self, league_id: Option<LeagueId>) -> Result<Vec<Player>, AppError> {
        Ok(self.list_where(league_id, |_| true).await)
    }

    async fn list_by_team(
        &self,
        team: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Player>, AppError> {
        Ok(self.list_where(league_id, |p| p.team == team).await)
    }

    async fn list_by_position(
        &self,
        position: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Player>, AppError> {
        Ok(self.list_where(league_id, |p| p.position == position).await)
    }

    async fn list_by_roster_flag(
        &self,
        is_on_my_team: bool,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Player>, AppError> {
        Ok(self
            .list_where(league_id, |p| p.is_on_my_team == is_on_my_team)
            .await)
    }

    #[instrument(skip(self, scores), fields(periods = scores.len()))]
    async fn update_scores(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
        scores: Vec<f64>,
    ) -> Result<bool, AppError> {
        let mut players = self.players.write().await;
        match players.iter_mut().find(|p| p.is(name, league_id)) {
            Some(player) => {
                player.scores = scores;
                debug!("Scores updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[instrument(skip(self, update), fields(new_name = %update.name))]
    async fn update_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
        update: &PlayerUpdate,
    ) -> Result<bool, AppError> {
        let mut players = self.players.write().await;

        let Some(index) = players.iter().position(|p| p.is(name, league_id)) else {
            return Ok(false);
        };

        let renamed_onto_other =
            update.name != name && players.iter().any(|p| p.is(&update.name, league_id));
        if renamed_onto_other {
            warn!("Rename clashes with an existing player");
            return Err(AppError::AlreadyExists(format!("player {}", update.name)));
        }

        update.apply(&mut players[index]);
        debug!("Player updated");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn toggle_my_team(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<Option<bool>, AppError> {
        let mut players = self.players.write().await;
        Ok(players
            .iter_mut()
            .find(|p| p.is(name, league_id))
            .map(|player| {
                player.is_on_my_team = !player.is_on_my_team;
                debug!(is_on_my_team = player.is_on_my_team, "Roster flag toggled");
                player.is_on_my_team
            }))
    }

    #[instrument(skip(self))]
    async fn delete_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<bool, AppError> {
        let mut players = self.players.write().await;
        let before = players.len();
        players.retain(|p| !p.is(name, league_id));
        Ok(players.len() < before)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self, league_id: Option<LeagueId>) -> Result<usize, AppError> {
        let mut players = self.players.write().await;
        let before = players.len();
        players.retain(|p| !in_scope(p, league_id));
        let removed = before - players.len();
        debug!(removed, "Players deleted");
        Ok(removed)
    }

    async fn count_by_league(&self) -> Result<Vec<(Option<LeagueId>, usize)>, AppError> {
        let players = self.players.read().await;
        let mut counts: Vec<(Option<LeagueId>, usize)> = Vec::new();
        for player in players.iter() {
            match counts.iter_mut().find(|(id, _)| *id == player.league_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((player.league_id, 1)),
            }
        }
        Ok(counts)
    }
}
