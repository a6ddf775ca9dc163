//! Scoreboard accumulation: raw result lines to per-team points.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RejectReason;
use crate::parse::{parse_line, MatchResult};

/// Points awarded to the winning team.
const WIN_POINTS: u64 = 3;
/// Points awarded to each team on a draw.
const DRAW_POINTS: u64 = 1;

/// Accumulated points per team, keyed by name exactly as written.
///
/// Teams appear the first time a valid line mentions them (at zero if
/// they earn nothing from that match) and their totals only ever grow.
/// Built fresh per run; the ordered map keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scoreboard(BTreeMap<String, u64>);

impl Scoreboard {
    /// Create an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of teams seen so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no team has been seen.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Points for a team, if it has been seen.
    pub fn points(&self, team: &str) -> Option<u64> {
        self.0.get(team).copied()
    }

    /// Iterate over (team, points) in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(team, points)| (team.as_str(), *points))
    }

    /// Apply one match: both teams exist afterwards, the winner gains
    /// three points, or both gain one on a draw.
    pub fn record(&mut self, result: &MatchResult) {
        let (home_points, away_points) = match result.home_score.cmp(&result.away_score) {
            Ordering::Greater => (WIN_POINTS, 0),
            Ordering::Less => (0, WIN_POINTS),
            Ordering::Equal => (DRAW_POINTS, DRAW_POINTS),
        };
        self.credit(&result.home, home_points);
        self.credit(&result.away, away_points);
    }

    /// Add points to a team, creating it at zero first if unseen.
    fn credit(&mut self, team: &str, points: u64) {
        *self.0.entry(team.to_string()).or_insert(0) += points;
    }
}

/// A line the scorer skipped, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// The raw line as received
    pub line: String,
    /// Why it was rejected
    pub reason: RejectReason,
}

/// Result of scoring a batch of result lines.
#[derive(Debug, Clone, Default)]
pub struct ScoringOutcome {
    /// Points accumulated from every accepted line
    pub scoreboard: Scoreboard,
    /// Skipped lines, in input order
    pub rejected: Vec<RejectedLine>,
}

/// Score a batch of raw result lines.
///
/// Each line either updates the scoreboard or is recorded as rejected;
/// a rejected line leaves the scoreboard untouched and processing
/// continues with the next line. An empty batch yields an empty
/// scoreboard and no rejections.
pub fn score_lines<I, S>(lines: I) -> ScoringOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = ScoringOutcome::default();

    for line in lines {
        let line = line.as_ref();
        match parse_line(line) {
            Ok(result) => outcome.scoreboard.record(&result),
            Err(reason) => outcome.rejected.push(RejectedLine {
                line: line.to_string(),
                reason,
            }),
        }
    }

    outcome
}
