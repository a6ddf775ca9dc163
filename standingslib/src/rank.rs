//! Ranking: scoreboard to an ordered sequence of standings entries.

use serde::{Deserialize, Serialize};

use crate::scoreboard::Scoreboard;

/// One team's place in the ranking input: name and accumulated points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Team name, exactly as written in the input
    pub team: String,
    /// Accumulated points
    pub points: u64,
}

/// Order every scoreboard entry: points descending, then team name
/// ascending (lexicographic byte order) as the tie-break.
///
/// Names are unique keys, so the order is a strict total order.
/// An empty scoreboard produces an empty ranking.
pub fn rank(scoreboard: &Scoreboard) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = scoreboard
        .iter()
        .map(|(team, points)| RankingEntry {
            team: team.to_string(),
            points,
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.team.cmp(&b.team)));
    entries
}
