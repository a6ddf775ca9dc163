//! Line sources: results file and interactive entry.
//!
//! Obtaining the line source is the only fatal failure class in the
//! whole pipeline; everything downstream works on plain strings.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::error::StandingsError;
use crate::Result;

/// Sentinel ending interactive entry, matched case-insensitively.
const END_TOKEN: &str = "end";

/// Read every line of a results file, trimmed of surrounding whitespace.
pub fn read_result_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| StandingsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// Accumulate trimmed lines from a reader until the end sentinel or EOF.
///
/// The sentinel line itself is excluded. Generic over the reader so it
/// can run against a cursor in tests; the CLI hands it locked stdin.
pub fn read_until_end<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case(END_TOKEN) {
            break;
        }
        lines.push(line.to_string());
    }

    Ok(lines)
}
