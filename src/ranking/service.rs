use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::models::{LeagueSummary, PlayerDetail, PlayerGroup, RankedPlayer, RosterSplit};
use crate::league::{League, LeagueDescriptor, LeagueId, LeagueRepository};
use crate::player::{NewPlayer, PlayerRepository, PlayerUpdate};
use crate::shared::{AppError, AppState};

/// Confirmation text required to wipe players
pub const DELETE_ALL_CONFIRMATION: &str = "DELETE ALL PLAYERS";

/// Answers leaderboard queries against the storage collaborators.
///
/// The league is always passed in by the caller; `None` means every league.
pub struct RankingService {
    players: Arc<dyn PlayerRepository + Send + Sync>,
    leagues: Arc<dyn LeagueRepository + Send + Sync>,
}

impl RankingService {
    pub fn new(
        players: Arc<dyn PlayerRepository + Send + Sync>,
        leagues: Arc<dyn LeagueRepository + Send + Sync>,
    ) -> Self {
        Self { players, leagues }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            Arc::clone(&state.player_repository),
            Arc::clone(&state.league_repository),
        )
    }

    /// Resolves a league by its short name
    pub async fn league_by_name(&self, name: &str) -> Result<League, AppError> {
        self.leagues
            .get_league_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("league {name}")))
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<RankedPlayer>, AppError> {
        let players = self.players.list_players(league_id).await?;
        let ranked = super::rank_all(players);
        debug!(count = ranked.len(), "Leaderboard ranked");
        self.attach_leagues(ranked).await
    }

    #[instrument(skip(self))]
    pub async fn my_team(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<RankedPlayer>, AppError> {
        let players = self.players.list_by_roster_flag(true, league_id).await?;
        self.attach_leagues(super::filter_by_flag(players, true)).await
    }

    #[instrument(skip(self))]
    pub async fn available_players(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<RankedPlayer>, AppError> {
        let players = self.players.list_by_roster_flag(false, league_id).await?;
        self.attach_leagues(super::filter_by_flag(players, false)).await
    }

    #[instrument(skip(self))]
    pub async fn roster_split(&self, league_id: Option<LeagueId>) -> Result<RosterSplit, AppError> {
        let players = self.players.list_players(league_id).await?;
        let split = super::partition_by_roster(players);
        Ok(RosterSplit {
            my_team: self.attach_leagues(split.my_team).await?,
            available: self.attach_leagues(split.available).await?,
        })
    }

    #[instrument(skip(self))]
    pub async fn teams(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<PlayerGroup<String>>, AppError> {
        let players = self.players.list_players(league_id).await?;
        self.attach_leagues_to_groups(super::group_by_team(players)).await
    }

    #[instrument(skip(self))]
    pub async fn positions(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<PlayerGroup<String>>, AppError> {
        let players = self.players.list_players(league_id).await?;
        self.attach_leagues_to_groups(super::group_by_position(players)).await
    }

    /// Every player grouped by league
    #[instrument(skip(self))]
    pub async fn leagues_overview(&self) -> Result<Vec<PlayerGroup<Option<LeagueId>>>, AppError> {
        let players = self.players.list_players(None).await?;
        self.attach_leagues_to_groups(super::group_by_league(players)).await
    }

    /// Player count and current leader of each registered league
    #[instrument(skip(self))]
    pub async fn league_summaries(&self) -> Result<Vec<LeagueSummary>, AppError> {
        let leagues = self.leagues.list_leagues().await?;
        let mut summaries = Vec::with_capacity(leagues.len());

        for league in leagues {
            let players = self.players.list_players(Some(league.id)).await?;
            let player_count = players.len();
            let descriptor = league.descriptor();
            let leader = super::rank_all(players)
                .into_iter()
                .next()
                .map(|leader| leader.with_league(Some(descriptor.clone())));

            summaries.push(LeagueSummary {
                league: descriptor,
                player_count,
                leader,
            });
        }

        Ok(summaries)
    }

    #[instrument(skip(self))]
    pub async fn player_detail(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<PlayerDetail, AppError> {
        let player = self
            .players
            .get_player(name, league_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("player {name}")))?;

        let calculation = player.score_breakdown();
        let league = self.descriptor_for(player.league_id).await?;

        Ok(PlayerDetail {
            player: RankedPlayer::new(player).with_league(league),
            calculation,
        })
    }

    #[instrument(skip(self, request), fields(name = %request.name, league_id = ?request.league_id))]
    pub async fn add_player(&self, request: NewPlayer) -> Result<RankedPlayer, AppError> {
        request.validate()?;

        let league = match request.league_id {
            Some(id) => Some(
                self.leagues
                    .get_league(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("league {id}")))?,
            ),
            None => None,
        };

        if let Some(league) = &league {
            if !league.is_valid_position(&request.position) {
                warn!(
                    position = %request.position,
                    league = %league.name,
                    "Position is not part of the league vocabulary"
                );
            }
        }

        let player = request.into_player();
        self.players.add_player(&player).await?;
        info!(on_my_team = player.is_on_my_team, "Player added");

        Ok(RankedPlayer::new(player).with_league(league.map(|l| l.descriptor())))
    }

    #[instrument(skip(self, update), fields(new_name = %update.name))]
    pub async fn update_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
        update: PlayerUpdate,
    ) -> Result<RankedPlayer, AppError> {
        update.validate()?;

        if !self.players.update_player(name, league_id, &update).await? {
            return Err(AppError::NotFound(format!("player {name}")));
        }
        info!("Player updated");

        self.player_detail(&update.name, league_id)
            .await
            .map(|detail| detail.player)
    }

    #[instrument(skip(self, scores), fields(periods = scores.len()))]
    pub async fn update_scores(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
        scores: Vec<f64>,
    ) -> Result<RankedPlayer, AppError> {
        if scores.iter().any(|score| !score.is_finite()) {
            return Err(AppError::Validation(
                "scores must be finite numbers".to_string(),
            ));
        }

        if !self.players.update_scores(name, league_id, scores).await? {
            return Err(AppError::NotFound(format!("player {name}")));
        }

        self.player_detail(name, league_id)
            .await
            .map(|detail| detail.player)
    }

    /// Flips roster membership, returning whether the player is now on my team
    #[instrument(skip(self))]
    pub async fn toggle_my_team(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<bool, AppError> {
        let on_my_team = self
            .players
            .toggle_my_team(name, league_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("player {name}")))?;

        if on_my_team {
            info!("Player added to my team");
        } else {
            info!("Player removed from my team");
        }
        Ok(on_my_team)
    }

    #[instrument(skip(self))]
    pub async fn delete_player(
        &self,
        name: &str,
        league_id: Option<LeagueId>,
    ) -> Result<(), AppError> {
        if !self.players.delete_player(name, league_id).await? {
            return Err(AppError::NotFound(format!("player {name}")));
        }
        info!("Player deleted");
        Ok(())
    }

    /// Deletes all players in scope once `confirmation` matches [`DELETE_ALL_CONFIRMATION`]
    #[instrument(skip(self, confirmation))]
    pub async fn delete_all_players(
        &self,
        confirmation: &str,
        league_id: Option<LeagueId>,
    ) -> Result<usize, AppError> {
        if confirmation != DELETE_ALL_CONFIRMATION {
            warn!("Delete-all confirmation text did not match");
            return Err(AppError::Validation(
                "incorrect confirmation text, no players were deleted".to_string(),
            ));
        }

        let removed = self.players.delete_all(league_id).await?;
        info!(removed, "All players deleted");
        Ok(removed)
    }

    async fn descriptor_for(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Option<LeagueDescriptor>, AppError> {
        match league_id {
            Some(id) => Ok(self.leagues.get_league(id).await?.map(|l| l.descriptor())),
            None => Ok(None),
        }
    }

    async fn league_descriptors(&self) -> Result<HashMap<LeagueId, LeagueDescriptor>, AppError> {
        Ok(self
            .leagues
            .list_leagues()
            .await?
            .into_iter()
            .map(|league| (league.id, league.descriptor()))
            .collect())
    }

    async fn attach_leagues(
        &self,
        ranked: Vec<RankedPlayer>,
    ) -> Result<Vec<RankedPlayer>, AppError> {
        let descriptors = self.league_descriptors().await?;
        Ok(with_descriptors(ranked, &descriptors))
    }

    async fn attach_leagues_to_groups<K>(
        &self,
        groups: Vec<PlayerGroup<K>>,
    ) -> Result<Vec<PlayerGroup<K>>, AppError> {
        let descriptors = self.league_descriptors().await?;
        Ok(groups
            .into_iter()
            .map(|group| PlayerGroup {
                key: group.key,
                players: with_descriptors(group.players, &descriptors),
            })
            .collect())
    }
}

fn with_descriptors(
    ranked: Vec<RankedPlayer>,
    descriptors: &HashMap<LeagueId, LeagueDescriptor>,
) -> Vec<RankedPlayer> {
    ranked
        .into_iter()
        .map(|entry| {
            let league = entry
                .player
                .league_id
                .and_then(|id| descriptors.get(&id).cloned());
            entry.with_league(league)
        })
        .collect()
}
