pub mod models;
pub mod repository;

pub use models::{default_leagues, League, LeagueDescriptor, LeagueId, LeagueKind};
pub use repository::{InMemoryLeagueRepository, LeagueRepository};
