use std::path::PathBuf;
use tracing::warn;

/// Runtime configuration for the ranking binary
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Tracing filter used when RUST_LOG is not set
    pub log_filter: String,

    /// Short name of the league shown by default (e.g. "epl")
    pub default_league: String,

    /// Optional JSON file holding a list of players to import on startup
    pub players_file: Option<PathBuf>,

    /// Load the built-in sample roster when no players file is given
    pub load_sample_roster: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "fantasy_ranker=debug".to_string(),
            default_league: "epl".to_string(),
            players_file: None,
            load_sample_roster: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("FANTASY_LOG") {
            config.log_filter = filter;
        }

        if let Some(league) = lookup("FANTASY_DEFAULT_LEAGUE") {
            config.default_league = league.trim().to_lowercase();
        }

        if let Some(path) = lookup("FANTASY_PLAYERS_FILE").filter(|p| !p.trim().is_empty()) {
            config.players_file = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("FANTASY_SAMPLE_ROSTER") {
            match flag.trim().parse::<bool>() {
                Ok(value) => config.load_sample_roster = value,
                Err(_) => warn!(value = %flag, "Ignoring invalid FANTASY_SAMPLE_ROSTER"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FANTASY_LOG", "fantasy_ranker=info"),
            ("FANTASY_DEFAULT_LEAGUE", " NFL "),
            ("FANTASY_PLAYERS_FILE", "players.json"),
            ("FANTASY_SAMPLE_ROSTER", "false"),
        ]));

        assert_eq!(config.log_filter, "fantasy_ranker=info");
        assert_eq!(config.default_league, "nfl");
        assert_eq!(config.players_file, Some(PathBuf::from("players.json")));
        assert!(!config.load_sample_roster);
    }

    #[test]
    fn invalid_flag_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("FANTASY_SAMPLE_ROSTER", "maybe")]));
        assert!(config.load_sample_roster);
    }
}
