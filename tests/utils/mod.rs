pub mod player_builders;
pub mod setup;

// Re-export main utilities for use by test files
pub use player_builders::PlayerBuilder;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
