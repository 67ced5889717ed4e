// Public API - what other modules can use
pub use input::{parse_scores, NewPlayer, PlayerUpdate};
pub use models::Player;
pub use repository::{InMemoryPlayerRepository, PlayerRepository};

mod input;
pub mod models;
pub mod repository;
