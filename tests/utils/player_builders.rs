use fantasy_ranker::{LeagueId, NewPlayer};

// ============================================================================
// Player Request Builder
// ============================================================================

pub struct PlayerBuilder {
    request: NewPlayer,
}

impl PlayerBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            request: NewPlayer {
                name: name.to_string(),
                team: "Team A".to_string(),
                position: "Forward".to_string(),
                scores: vec![],
                is_on_my_team: false,
                league_id: None,
            },
        }
    }

    pub fn team(mut self, team: &str) -> Self {
        self.request.team = team.to_string();
        self
    }

    pub fn position(mut self, position: &str) -> Self {
        self.request.position = position.to_string();
        self
    }

    pub fn scores(mut self, scores: &[f64]) -> Self {
        self.request.scores = scores.to_vec();
        self
    }

    pub fn on_my_team(mut self) -> Self {
        self.request.is_on_my_team = true;
        self
    }

    pub fn league(mut self, league_id: LeagueId) -> Self {
        self.request.league_id = Some(league_id);
        self
    }

    pub fn build(self) -> NewPlayer {
        self.request
    }
}
