//! Table selection for one guest.

use seatplan_scoring::ScoreExplanation;

/// A scored open table.
#[derive(Debug, Clone)]
pub struct TableCandidate {
    /// Position of the table in the seating.
    pub index: usize,
    pub explanation: ScoreExplanation,
}

/// Picks the highest-scoring candidate.
///
/// Ties go to the earliest candidate. Returns `None` when there are no
/// candidates.
pub fn pick_best<I>(candidates: I) -> Option<TableCandidate>
where
    I: IntoIterator<Item = TableCandidate>,
{
    let mut best: Option<TableCandidate> = None;

    for candidate in candidates {
        let is_better = match &best {
            None => true,
            Some(current) => candidate.explanation.score > current.explanation.score,
        };

        if is_better {
            best = Some(candidate);
        }
    }

    best
}
