use std::sync::Arc;

use fantasy_ranker::{
    roster, AppConfig, AppError, AppState, InMemoryLeagueRepository, InMemoryPlayerRepository,
    RankedPlayer, RankingService,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fantasy ranker");

    let state = AppState::new(
        Arc::new(InMemoryPlayerRepository::new()),
        Arc::new(InMemoryLeagueRepository::with_default_leagues()),
        config,
    );
    let service = RankingService::from_state(&state);

    let league = service.league_by_name(&state.config.default_league).await?;
    info!(league = %league.display_name, "Using default league");

    let players = match &state.config.players_file {
        Some(path) => roster::with_default_league(roster::load_roster_file(path)?, league.id),
        None if state.config.load_sample_roster => roster::sample_roster(Some(league.id)),
        None => Vec::new(),
    };

    for player in players {
        let name = player.name.clone();
        if let Err(e) = service.add_player(player).await {
            warn!(player = %name, error = %e, "Skipping player");
        }
    }

    let leaderboard = service.leaderboard(Some(league.id)).await?;
    for line in leaderboard_table(&league.display_name, &leaderboard) {
        info!("{line}");
    }

    for summary in service.league_summaries().await? {
        info!(
            league = %summary.league.display_name,
            players = summary.player_count,
            leader = summary.leader.as_ref().map(|l| l.name()).unwrap_or("-"),
            "League summary"
        );
    }

    Ok(())
}

fn leaderboard_table(title: &str, ranked: &[RankedPlayer]) -> Vec<String> {
    let mut lines = vec![
        format!("{} LEADERBOARD", title.to_uppercase()),
        format!(
            "{:<4} {:<20} {:<18} {:<12} {:<12}",
            "Rank", "Player", "Team", "Position", "Final Score"
        ),
    ];

    lines.extend(ranked.iter().enumerate().map(|(index, entry)| {
        format!(
            "{:<4} {:<20} {:<18} {:<12} {:.2}",
            index + 1,
            entry.player.name,
            entry.player.team,
            entry.player.position,
            entry.final_score
        )
    }));

    lines
}
