//! Table-ready standings output.
//!
//! `LeagueTable` is the presentation-ready structure: each row carries a
//! competition rank number, the team name, and the point total.
//! Rendering is pure string building; the same rows serialize to JSON
//! for structured output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rank::RankingEntry;

/// A single row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Competition rank: tied point totals share a rank, and the next
    /// distinct total resumes at its 1-based position (1,2,2,4 style,
    /// not dense 1,2,2,3).
    pub rank: usize,
    /// Team name
    pub team: String,
    /// Accumulated points
    pub points: u64,
}

/// The full standings table, one row per ranked team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    /// Rows in display order
    pub rows: Vec<TableRow>,
}

impl LeagueTable {
    /// Build a table from an ordered ranking, assigning competition
    /// rank numbers.
    ///
    /// The first entry gets rank 1; each later entry keeps the previous
    /// rank when its points match the previous entry's, and otherwise
    /// takes its own 1-based position.
    pub fn from_ranking(ranking: &[RankingEntry]) -> Self {
        let mut rows = Vec::with_capacity(ranking.len());
        let mut rank = 0;
        let mut prev_points = None;

        for (index, entry) in ranking.iter().enumerate() {
            if prev_points != Some(entry.points) {
                rank = index + 1;
            }
            rows.push(TableRow {
                rank,
                team: entry.team.clone(),
                points: entry.points,
            });
            prev_points = Some(entry.points);
        }

        LeagueTable { rows }
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}, {} {}",
            self.rank,
            self.team,
            self.points,
            unit(self.points)
        )
    }
}

impl fmt::Display for LeagueTable {
    /// Rows joined by single newlines, no trailing newline; an empty
    /// table renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Singular unit for exactly one point, plural otherwise (zero included).
fn unit(points: u64) -> &'static str {
    if points == 1 {
        "pt"
    } else {
        "pts"
    }
}
