//! Orderings and groupings of players by final score.
//!
//! Every function computes final scores from the players' score sequences at
//! call time and sorts best first. Sorting is stable, so players with equal
//! final scores keep the order they were passed in (for repository data, the
//! order they were stored in).

pub mod models;
pub mod service;

pub use models::{LeagueSummary, PlayerDetail, PlayerGroup, RankedPlayer, RosterSplit};
pub use service::RankingService;

use std::collections::HashMap;
use std::hash::Hash;

use crate::league::LeagueId;
use crate::player::Player;

/// Every player, best first
pub fn rank_all(players: impl IntoIterator<Item = Player>) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = players.into_iter().map(RankedPlayer::new).collect();
    sort_by_final_score(&mut ranked);
    ranked
}

/// Players whose roster flag equals `is_on_my_team`, best first
pub fn filter_by_flag(
    players: impl IntoIterator<Item = Player>,
    is_on_my_team: bool,
) -> Vec<RankedPlayer> {
    rank_all(
        players
            .into_iter()
            .filter(|player| player.is_on_my_team == is_on_my_team),
    )
}

/// Splits players into "my team" and "available" in a single pass
pub fn partition_by_roster(players: impl IntoIterator<Item = Player>) -> RosterSplit {
    let (my_team, available): (Vec<Player>, Vec<Player>) = players
        .into_iter()
        .partition(|player| player.is_on_my_team);

    RosterSplit {
        my_team: rank_all(my_team),
        available: rank_all(available),
    }
}

/// Groups players by `key_fn`.
///
/// Groups appear in the order their key is first seen; players within a
/// group are best first.
pub fn group_by<K, F>(players: impl IntoIterator<Item = Player>, key_fn: F) -> Vec<PlayerGroup<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&Player) -> K,
{
    let mut groups: Vec<PlayerGroup<K>> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for player in players {
        let key = key_fn(&player);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(PlayerGroup {
                key,
                players: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].players.push(RankedPlayer::new(player));
    }

    for group in &mut groups {
        sort_by_final_score(&mut group.players);
    }

    groups
}

pub fn group_by_team(players: impl IntoIterator<Item = Player>) -> Vec<PlayerGroup<String>> {
    group_by(players, |player| player.team.clone())
}

pub fn group_by_position(players: impl IntoIterator<Item = Player>) -> Vec<PlayerGroup<String>> {
    group_by(players, |player| player.position.clone())
}

/// Groups by league id; players without a league share the `None` group
pub fn group_by_league(
    players: impl IntoIterator<Item = Player>,
) -> Vec<PlayerGroup<Option<LeagueId>>> {
    group_by(players, |player| player.league_id)
}

fn sort_by_final_score(players: &mut [RankedPlayer]) {
    players.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
}
