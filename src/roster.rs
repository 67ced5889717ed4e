use std::path::Path;

use tracing::{debug, info};

use crate::league::LeagueId;
use crate::player::NewPlayer;
use crate::shared::AppError;

/// Reads a JSON array of players from disk
pub fn load_roster_file(path: &Path) -> Result<Vec<NewPlayer>, AppError> {
    debug!(path = %path.display(), "Reading roster file");
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;
    let roster = parse_roster(&text)?;
    info!(path = %path.display(), players = roster.len(), "Roster file loaded");
    Ok(roster)
}

pub fn parse_roster(json: &str) -> Result<Vec<NewPlayer>, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::Import(e.to_string()))
}

/// Places every entry that names no league into `league_id`
pub fn with_default_league(mut roster: Vec<NewPlayer>, league_id: LeagueId) -> Vec<NewPlayer> {
    let mut assigned = 0;
    for player in roster.iter_mut().filter(|p| p.league_id.is_none()) {
        player.league_id = Some(league_id);
        assigned += 1;
    }
    if assigned > 0 {
        debug!(assigned, league_id, "Roster entries placed in default league");
    }
    roster
}

/// Five-player demo roster placed in the given league
pub fn sample_roster(league_id: Option<LeagueId>) -> Vec<NewPlayer> {
    [
        ("John Smith", "Team A", "Forward", [85.0, 92.0, 78.0, 88.0, 95.0]),
        ("Sarah Johnson", "Team B", "Midfielder", [75.0, 83.0, 90.0, 87.0, 82.0]),
        ("Mike Davis", "Team A", "Defender", [65.0, 70.0, 75.0, 80.0, 85.0]),
        ("Emily Wilson", "Team C", "Forward", [95.0, 88.0, 92.0, 85.0, 90.0]),
        ("Chris Brown", "Team B", "Goalkeeper", [70.0, 75.0, 80.0, 78.0, 82.0]),
    ]
    .into_iter()
    .map(|(name, team, position, scores)| NewPlayer {
        name: name.to_string(),
        team: team.to_string(),
        position: position.to_string(),
        scores: scores.to_vec(),
        is_on_my_team: false,
        league_id,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roster_with_defaults() {
        let json = r#"[
            {
                "name": "Max Verstappen",
                "team": "Red Bull Racing",
                "position": "Driver",
                "scores": [99, 97],
                "league_id": 1
            },
            {"name": "Lando Norris", "team": "McLaren", "position": "Driver", "is_on_my_team": true}
        ]"#;

        let roster = parse_roster(json).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].league_id, Some(1));
        assert_eq!(roster[0].scores, vec![99.0, 97.0]);
        assert!(roster[1].scores.is_empty());
        assert!(roster[1].is_on_my_team);
    }

    #[test]
    fn entries_without_league_join_the_default() {
        let json = r#"[
            {"name": "Bukayo Saka", "team": "Arsenal", "position": "Forward"},
            {"name": "Lando Norris", "team": "McLaren", "position": "Driver", "league_id": 1}
        ]"#;

        let roster = with_default_league(parse_roster(json).unwrap(), 2);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].league_id, Some(2));
        assert_eq!(roster[1].league_id, Some(1));
    }

    #[test]
    fn malformed_roster_is_import_error() {
        assert!(matches!(
            parse_roster(r#"[{"name": "No Team"}]"#),
            Err(AppError::Import(_))
        ));
    }

    #[test]
    fn missing_file_is_import_error() {
        let result = load_roster_file(Path::new("/nonexistent/roster.json"));
        assert!(matches!(result, Err(AppError::Import(_))));
    }

    #[test]
    fn sample_roster_uses_given_league() {
        let roster = sample_roster(Some(2));

        assert_eq!(roster.len(), 5);
        assert!(roster.iter().all(|p| p.league_id == Some(2)));
        assert!(roster.iter().all(|p| p.validate().is_ok()));
    }
}
