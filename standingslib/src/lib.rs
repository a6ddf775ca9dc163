//! # standingslib
//!
//! League standings from textual match results.
//!
//! ## Overview
//!
//! The library is a four-stage pipeline, each stage pure and usable on
//! its own:
//!
//! 1. **Parse & score** — [`score_lines`] turns raw result lines of the
//!    form `"Name1 Score1, Name2 Score2"` into a [`Scoreboard`] of
//!    accumulated points (3 for a win, 1 each for a draw), skipping
//!    malformed lines and recording why each was skipped.
//! 2. **Rank** — [`rank`] orders the scoreboard by points descending,
//!    team name ascending.
//! 3. **Format** — [`LeagueTable`] assigns competition rank numbers
//!    (tied totals share a rank, 1,2,2,4 style) and renders the table.
//! 4. **Line source** — [`read_result_file`] and [`read_until_end`]
//!    supply the raw lines from a file or an interactive reader.
//!
//! Team names may contain internal spaces: each side of a result line
//! splits at its *last* space, so `"FC Awesome 0"` parses as the team
//! `FC Awesome` with score `0`.
//!
//! ## Example
//!
//! ```rust
//! use standingslib::{rank, score_lines, LeagueTable};
//!
//! let outcome = score_lines(["Lions 3, Snakes 3", "Tarantulas 1, FC Awesome 0"]);
//! assert!(outcome.rejected.is_empty());
//!
//! let table = LeagueTable::from_ranking(&rank(&outcome.scoreboard));
//! assert_eq!(
//!     table.to_string(),
//!     "1. Tarantulas, 3 pts\n2. Lions, 1 pt\n2. Snakes, 1 pt\n4. FC Awesome, 0 pts"
//! );
//! ```

pub mod error;
pub mod input;
pub mod parse;
pub mod rank;
pub mod scoreboard;
pub mod table;

pub use error::{RejectReason, StandingsError};
pub use input::{read_result_file, read_until_end};
pub use parse::{parse_line, MatchResult};
pub use rank::{rank, RankingEntry};
pub use scoreboard::{score_lines, RejectedLine, Scoreboard, ScoringOutcome};
pub use table::{LeagueTable, TableRow};

/// Result type for standingslib operations
pub type Result<T> = std::result::Result<T, StandingsError>;
