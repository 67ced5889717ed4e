use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

pub type LeagueId = u32;

/// Leagues with a known position and team vocabulary
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeagueKind {
    F1,
    Epl,
    Ucl,
    Nfl,
}

const FALLBACK_POSITIONS: &[&str] = &["Player"];
const FALLBACK_TEAMS: &[&str] = &["Team A", "Team B", "Team C"];

impl LeagueKind {
    /// Looks up a league kind from its short name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name.trim()).ok()
    }

    pub fn positions(self) -> &'static [&'static str] {
        match self {
            LeagueKind::F1 => &["Driver", "Constructor"],
            LeagueKind::Epl | LeagueKind::Ucl => {
                &["Forward", "Midfielder", "Defender", "Goalkeeper"]
            }
            LeagueKind::Nfl => &[
                "Quarterback",
                "Running Back",
                "Wide Receiver",
                "Tight End",
                "Defense",
                "Kicker",
            ],
        }
    }

    pub fn typical_teams(self) -> &'static [&'static str] {
        match self {
            LeagueKind::F1 => &[
                "Red Bull Racing",
                "Mercedes",
                "Ferrari",
                "McLaren",
                "Alpine",
                "Aston Martin",
                "Williams",
                "AlphaTauri",
                "Alfa Romeo",
                "Haas",
            ],
            LeagueKind::Epl => &[
                "Manchester City",
                "Arsenal",
                "Liverpool",
                "Chelsea",
                "Newcastle United",
                "Manchester United",
                "Tottenham",
                "Brighton",
                "Aston Villa",
                "West Ham",
            ],
            LeagueKind::Ucl => &[
                "Real Madrid",
                "Manchester City",
                "Bayern Munich",
                "PSG",
                "Liverpool",
                "Barcelona",
                "Chelsea",
                "Inter Milan",
                "AC Milan",
                "Atletico Madrid",
            ],
            LeagueKind::Nfl => &[
                "Kansas City Chiefs",
                "Buffalo Bills",
                "Cincinnati Bengals",
                "Philadelphia Eagles",
                "San Francisco 49ers",
                "Dallas Cowboys",
                "Miami Dolphins",
                "Baltimore Ravens",
            ],
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            LeagueKind::F1 => "Formula 1",
            LeagueKind::Epl => "English Premier League",
            LeagueKind::Ucl => "UEFA Champions League",
            LeagueKind::Nfl => "National Football League",
        }
    }

    fn sport_type(self) -> &'static str {
        match self {
            LeagueKind::F1 => "Motorsport",
            LeagueKind::Epl | LeagueKind::Ucl => "Football",
            LeagueKind::Nfl => "American Football",
        }
    }

    fn description(self) -> &'static str {
        match self {
            LeagueKind::F1 => "Formula 1 Championship racing with drivers and constructors",
            LeagueKind::Epl => "English Premier League football/soccer",
            LeagueKind::Ucl => "UEFA Champions League European football",
            LeagueKind::Nfl => "NFL American Football league",
        }
    }
}

/// A league that players are registered in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String, // Short name like "f1" or "epl"
    pub display_name: String,
    pub sport_type: String,
    pub description: String,
    pub scoring_system: String,
}

impl League {
    pub fn new(
        id: LeagueId,
        name: impl Into<String>,
        display_name: impl Into<String>,
        sport_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            display_name: display_name.into(),
            sport_type: sport_type.into(),
            description: String::new(),
            scoring_system: "weighted".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(&self) -> Option<LeagueKind> {
        LeagueKind::from_name(&self.name)
    }

    /// Valid positions for this league, or a generic "Player" slot for unknown leagues
    pub fn positions(&self) -> &'static [&'static str] {
        self.kind()
            .map(LeagueKind::positions)
            .unwrap_or(FALLBACK_POSITIONS)
    }

    pub fn typical_teams(&self) -> &'static [&'static str] {
        self.kind()
            .map(LeagueKind::typical_teams)
            .unwrap_or(FALLBACK_TEAMS)
    }

    pub fn is_valid_position(&self, position: &str) -> bool {
        self.positions()
            .iter()
            .any(|p| p.eq_ignore_ascii_case(position.trim()))
    }

    pub fn descriptor(&self) -> LeagueDescriptor {
        LeagueDescriptor {
            id: self.id,
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            sport_type: self.sport_type.clone(),
            description: self.description.clone(),
            scoring_system: self.scoring_system.clone(),
            positions: self.positions().iter().map(|p| p.to_string()).collect(),
            typical_teams: self.typical_teams().iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// League as embedded in serialized player output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueDescriptor {
    pub id: LeagueId,
    pub name: String,
    pub display_name: String,
    pub sport_type: String,
    pub description: String,
    pub scoring_system: String,
    pub positions: Vec<String>,
    pub typical_teams: Vec<String>,
}

/// The four built-in leagues, numbered 1 to 4 in declaration order
pub fn default_leagues() -> Vec<League> {
    LeagueKind::iter()
        .zip(1..)
        .map(|(kind, id)| {
            League::new(id, kind.as_ref(), kind.display_name(), kind.sport_type())
                .with_description(kind.description())
        })
        .collect()
}
