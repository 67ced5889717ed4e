use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::{default_leagues, League, LeagueId};
use crate::shared::AppError;

/// Trait for league lookup and registration
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn add_league(&self, league: &League) -> Result<(), AppError>;
    async fn get_league(&self, league_id: LeagueId) -> Result<Option<League>, AppError>;

    /// Case-insensitive lookup by short name
    async fn get_league_by_name(&self, name: &str) -> Result<Option<League>, AppError>;

    /// All leagues ordered by id
    async fn list_leagues(&self) -> Result<Vec<League>, AppError>;
}

/// In-memory implementation of LeagueRepository
#[derive(Debug, Default)]
pub struct InMemoryLeagueRepository {
    leagues: RwLock<BTreeMap<LeagueId, League>>,
}

impl InMemoryLeagueRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            leagues: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates a repository holding F1, EPL, UCL and NFL
    pub fn with_default_leagues() -> Self {
        let leagues = default_leagues()
            .into_iter()
            .map(|league| (league.id, league))
            .collect();

        Self {
            leagues: RwLock::new(leagues),
        }
    }
}

#[async_trait]
impl LeagueRepository for InMemoryLeagueRepository {
    #[instrument(skip(self, league), fields(league_id = league.id, name = %league.name))]
    async fn add_league(&self, league: &League) -> Result<(), AppError> {
        let mut leagues = self.leagues.write().await;

        let name_taken = leagues
            .values()
            .any(|existing| existing.name.eq_ignore_ascii_case(&league.name));
        if leagues.contains_key(&league.id) || name_taken {
            warn!("League already exists");
            return Err(AppError::AlreadyExists(format!("league {}", league.name)));
        }

        leagues.insert(league.id, league.clone());
        debug!("League registered");
        Ok(())
    }

    async fn get_league(&self, league_id: LeagueId) -> Result<Option<League>, AppError> {
        let leagues = self.leagues.read().await;
        Ok(leagues.get(&league_id).cloned())
    }

    async fn get_league_by_name(&self, name: &str) -> Result<Option<League>, AppError> {
        let leagues = self.leagues.read().await;
        Ok(leagues
            .values()
            .find(|league| league.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }

    async fn list_leagues(&self) -> Result<Vec<League>, AppError> {
        let leagues = self.leagues.read().await;
        Ok(leagues.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_repository_lists_four_leagues() {
        let repo = InMemoryLeagueRepository::with_default_leagues();
        let leagues = repo.list_leagues().await.unwrap();

        assert_eq!(leagues.len(), 4);
        assert_eq!(leagues[0].name, "f1");
    }

    #[tokio::test]
    async fn finds_league_by_name_case_insensitive() {
        let repo = InMemoryLeagueRepository::with_default_leagues();

        let league = repo.get_league_by_name("UCL").await.unwrap().unwrap();
        assert_eq!(league.id, 3);
        assert!(repo.get_league_by_name("mlb").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_duplicate_id_or_name() {
        let repo = InMemoryLeagueRepository::with_default_leagues();

        let same_id = League::new(1, "mlb", "Major League Baseball", "Baseball");
        let same_name = League::new(10, "NFL", "Another NFL", "American Football");

        assert!(matches!(
            repo.add_league(&same_id).await,
            Err(AppError::AlreadyExists(_))
        ));
        assert!(matches!(
            repo.add_league(&same_name).await,
            Err(AppError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn adds_custom_league() {
        let repo = InMemoryLeagueRepository::new();
        let league = League::new(5, "mlb", "Major League Baseball", "Baseball");

        repo.add_league(&league).await.unwrap();

        assert_eq!(repo.get_league(5).await.unwrap(), Some(league));
    }
}
