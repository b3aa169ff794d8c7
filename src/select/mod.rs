//! Line selection subsystem.
//!
//! # Data Flow
//! ```text
//! document text + Criterion
//!     → segments.rs (split on runs of \r / \n)
//!     → filter by criterion (line number, search, random)
//!     → one non-blank line, returned unmodified
//! ```
//!
//! # Design Decisions
//! - Pure function of text, criterion and random source
//! - Blank lines are never returned; a blank document is rejected up front
//! - Random picks are uniform over the non-blank candidates

pub mod criterion;
pub mod segments;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

pub use criterion::Criterion;
pub use segments::{is_blank, segments};

/// Reasons a line could not be selected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Document is empty or whitespace only.
    #[error("The remote document is empty!")]
    EmptyDocument,

    /// Requested line is out of range or blank.
    #[error("Line {0} is empty or nonexistent!")]
    LineNotFound(i64),

    /// No line contains the search query.
    #[error("Could not find a line containing \"{0}\"!")]
    NoMatch(String),
}

/// Select a line using the thread-local random generator.
pub fn select_line(text: &str, criterion: &Criterion) -> Result<String, SelectionError> {
    select_line_with(text, criterion, &mut rand::thread_rng())
}

/// Select a line using the given random generator.
pub fn select_line_with<R: Rng + ?Sized>(
    text: &str,
    criterion: &Criterion,
    rng: &mut R,
) -> Result<String, SelectionError> {
    if is_blank(text) {
        return Err(SelectionError::EmptyDocument);
    }

    let lines = segments(text);

    let line = match criterion {
        Criterion::LineNumber(number) => usize::try_from(*number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| lines.get(idx).copied())
            .filter(|line| !is_blank(line))
            .ok_or(SelectionError::LineNotFound(*number))?,
        Criterion::Search(query) => {
            let needle = query.to_lowercase();
            let matches: Vec<&str> = lines
                .iter()
                .copied()
                .filter(|line| !is_blank(line) && line.to_lowercase().contains(&needle))
                .collect();

            tracing::debug!(query = %query, matches = matches.len(), "Searched document");

            matches
                .choose(rng)
                .copied()
                .ok_or_else(|| SelectionError::NoMatch(query.clone()))?
        }
        Criterion::Random => {
            let candidates: Vec<&str> = lines
                .iter()
                .copied()
                .filter(|line| !is_blank(line))
                .collect();

            tracing::debug!(candidates = candidates.len(), "Picking random line");

            candidates
                .choose(rng)
                .copied()
                .ok_or(SelectionError::EmptyDocument)?
        }
    };

    Ok(line.to_string())
}
