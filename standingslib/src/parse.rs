//! Per-line parsing of match results.
//!
//! A result line is two `", "`-separated sides, each a team name
//! followed by a single space and an integer score. Team names may
//! contain internal spaces, so each side splits at its *last* space.

use serde::{Deserialize, Serialize};

use crate::error::RejectReason;

/// A single validated match: two distinct teams and their goal counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// First-listed team
    pub home: String,
    /// Goals scored by the first-listed team
    pub home_score: u64,
    /// Second-listed team
    pub away: String,
    /// Goals scored by the second-listed team
    pub away_score: u64,
}

impl MatchResult {
    /// True when both teams scored the same number of goals.
    pub fn is_draw(&self) -> bool {
        self.home_score == self.away_score
    }
}

/// Parse one result line into a [`MatchResult`].
///
/// Any shape or validation failure rejects the whole line with a
/// [`RejectReason`]; there is no partial success.
pub fn parse_line(line: &str) -> Result<MatchResult, RejectReason> {
    let sides: Vec<&str> = line.split(", ").collect();
    if sides.len() != 2 {
        return Err(RejectReason::SideCount(sides.len()));
    }

    let (home, home_score) = parse_side(sides[0])?;
    let (away, away_score) = parse_side(sides[1])?;

    if home == away {
        return Err(RejectReason::SelfMatch(home.to_string()));
    }
    for (team, score) in [(home, home_score), (away, away_score)] {
        if score < 0 {
            return Err(RejectReason::NegativeScore {
                team: team.to_string(),
                score,
            });
        }
    }

    Ok(MatchResult {
        home: home.to_string(),
        home_score: home_score as u64,
        away: away.to_string(),
        away_score: away_score as u64,
    })
}

/// Split a side at its last space into team name and score token.
///
/// Splitting at the last space (not any whitespace) is what lets
/// multi-word names like "FC Awesome" through intact.
fn parse_side(side: &str) -> Result<(&str, i64), RejectReason> {
    let (name, token) = side
        .rsplit_once(' ')
        .ok_or_else(|| RejectReason::MissingScore(side.to_string()))?;
    let score = token
        .parse::<i64>()
        .map_err(|_| RejectReason::ScoreNotInteger(token.to_string()))?;
    Ok((name, score))
}
