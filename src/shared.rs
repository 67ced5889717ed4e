use std::sync::Arc;
use thiserror::Error;

use crate::config::AppConfig;
use crate::league::repository::LeagueRepository;
use crate::player::repository::PlayerRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    pub league_repository: Arc<dyn LeagueRepository + Send + Sync>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        league_repository: Arc<dyn LeagueRepository + Send + Sync>,
        config: AppConfig,
    ) -> Self {
        Self {
            player_repository,
            league_repository,
            config,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Import error: {0}")]
    Import(String),
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::league::repository::InMemoryLeagueRepository;
    use crate::player::repository::InMemoryPlayerRepository;

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        player_repository: Option<Arc<dyn PlayerRepository + Send + Sync>>,
        config: AppConfig,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                player_repository: None,
                config: AppConfig::default(),
            }
        }

        pub fn with_player_repository(
            mut self,
            repo: Arc<dyn PlayerRepository + Send + Sync>,
        ) -> Self {
            self.player_repository = Some(repo);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                player_repository: self
                    .player_repository
                    .unwrap_or_else(|| Arc::new(InMemoryPlayerRepository::new())),
                league_repository: Arc::new(InMemoryLeagueRepository::with_default_leagues()),
                config: self.config,
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound("Player 'Kane'".into()), "Not found: Player 'Kane'")]
    #[case(AppError::AlreadyExists("League 'epl'".into()), "Already exists: League 'epl'")]
    #[case(AppError::Validation("Name is required".into()), "Validation error: Name is required")]
    #[case(AppError::Import("expected value".into()), "Import error: expected value")]
    fn error_messages(#[case] error: AppError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
