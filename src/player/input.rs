use serde::{Deserialize, Serialize};

use super::models::Player;
use crate::league::LeagueId;
use crate::shared::AppError;

/// Parses comma-separated score text such as `"85, 92.5, 78"`.
///
/// Blank input is an empty sequence. Any item that is not a finite number
/// rejects the whole input.
pub fn parse_scores(text: &str) -> Result<Vec<f64>, AppError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "invalid score '{item}', enter comma-separated numbers"
                    ))
                })
        })
        .collect()
}

/// Request to register a new player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(default)]
    pub scores: Vec<f64>,
    #[serde(default)]
    pub is_on_my_team: bool,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
}

impl NewPlayer {
    /// Builds a request from raw form text, parsing the score list
    pub fn from_form(
        name: &str,
        team: &str,
        position: &str,
        scores_text: &str,
        is_on_my_team: bool,
        league_id: Option<LeagueId>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            name: name.trim().to_string(),
            team: team.trim().to_string(),
            position: position.trim().to_string(),
            scores: parse_scores(scores_text)?,
            is_on_my_team,
            league_id,
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("team", &self.team)?;
        require_text("position", &self.position)?;
        require_finite(&self.scores)
    }

    pub fn into_player(self) -> Player {
        Player {
            name: self.name,
            team: self.team,
            position: self.position,
            scores: self.scores,
            is_on_my_team: self.is_on_my_team,
            league_id: self.league_id,
        }
    }
}

/// Replacement details for an existing player, including a possible rename
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub name: String,
    pub team: String,
    pub position: String,
    pub scores: Vec<f64>,
}

impl PlayerUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("team", &self.team)?;
        require_text("position", &self.position)?;
        require_finite(&self.scores)
    }

    pub(crate) fn apply(&self, player: &mut Player) {
        player.name = self.name.clone();
        player.team = self.team.clone();
        player.position = self.position.clone();
        player.scores = self.scores.clone();
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_finite(scores: &[f64]) -> Result<(), AppError> {
    if scores.iter().any(|score| !score.is_finite()) {
        return Err(AppError::Validation(
            "scores must be finite numbers".to_string(),
        ));
    }
    Ok(())
}
