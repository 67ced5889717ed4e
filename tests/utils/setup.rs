use std::sync::Arc;

use fantasy_ranker::{
    AppConfig, AppState, InMemoryLeagueRepository, InMemoryPlayerRepository, NewPlayer,
    RankingService,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub state: AppState,
    pub service: RankingService,
}

pub struct TestSetupBuilder {
    players: Vec<NewPlayer>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    pub fn with_player(mut self, player: NewPlayer) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_players(mut self, players: Vec<NewPlayer>) -> Self {
        self.players.extend(players);
        self
    }

    pub async fn build(self) -> TestSetup {
        let state = AppState::new(
            Arc::new(InMemoryPlayerRepository::new()),
            Arc::new(InMemoryLeagueRepository::with_default_leagues()),
            AppConfig::default(),
        );
        let service = RankingService::from_state(&state);

        for player in self.players {
            service
                .add_player(player)
                .await
                .expect("seeding a test player should succeed");
        }

        TestSetup { state, service }
    }
}
