// Depth-first feasibility search over per-region candidate lists.

use super::geometry::rects_overlap;
use super::types::{LabelBox, Placement};

/// Picks one candidate per region, in region order, so that no two picked
/// boxes overlap, and returns the first complete assignment found.
///
/// The frontier is an explicit stack of partial assignments, each a prefix
/// covering regions `0..k`. Expansion is LIFO, so within one region's list
/// the later candidates are tried first.
pub(crate) fn first_feasible(candidates: &[Vec<LabelBox>]) -> Placement {
    let region_count = candidates.len();
    if region_count == 0 {
        // Trivially complete, and distinct from infeasible.
        return Placement::Complete(Vec::new());
    }

    let mut stack: Vec<Vec<LabelBox>> = vec![Vec::new()];

    while let Some(chosen) = stack.pop() {
        if chosen.len() == region_count {
            return Placement::Complete(chosen);
        }

        for candidate in &candidates[chosen.len()] {
            if chosen.iter().any(|placed| rects_overlap(candidate, placed)) {
                continue;
            }
            let mut extended = chosen.clone();
            extended.push(*candidate);
            stack.push(extended);
        }
    }

    Placement::Infeasible
}
