//! Error types for standingslib

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors: failure to obtain the line source at all.
///
/// Nothing else in the pipeline can fail fatally once a list of raw
/// lines exists; per-line problems are [`RejectReason`] values instead.
#[derive(Error, Debug)]
pub enum StandingsError {
    /// Failed to read the results file
    #[error("failed to read results file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single result line was rejected.
///
/// Rejections are line-scoped and non-fatal. The scorer records the
/// offending line together with its reason and moves on; the scoreboard
/// is left exactly as it was before that line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Line did not split into exactly two `", "`-separated sides
    #[error("expected two comma-separated sides, found {0}")]
    SideCount(usize),

    /// A side has no space separating team name from score
    #[error("missing score after team name in '{0}'")]
    MissingScore(String),

    /// The trailing token of a side is not a base-10 integer
    #[error("score '{0}' is not an integer")]
    ScoreNotInteger(String),

    /// Both sides name the same team
    #[error("a team cannot play itself ({0})")]
    SelfMatch(String),

    /// A parsed score is negative
    #[error("negative score {score} for '{team}'")]
    NegativeScore { team: String, score: i64 },
}
