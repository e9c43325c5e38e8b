//! Best Short-Side Fit (BSSF) placement heuristic.
//!
//! For every free rectangle and every allowed orientation the heuristic
//! measures the smaller of the two leftover sides after placing the kerf
//! footprint in the rectangle's corner. The candidate leaving the smallest
//! short side wins, which tends to fill narrow gaps before opening up large
//! regions.
//!
//! The scan is greedy and deterministic: free rectangles are visited in pool
//! order, orientations in [`Orientation::ALL`] order, and only a strictly
//! better score replaces the current best, so ties go to the first candidate
//! encountered.
//!
//! # References
//!
//! - Jukka Jylänki (2010), "A Thousand Ways to Pack the Bin"

use slabcut_core::{Orientation, Rect, Size};

/// Tolerance for fit tests, absorbing rounding from repeated splits.
pub(crate) const FIT_EPS: f64 = 1e-9;

static BOTH: [Orientation; 2] = Orientation::ALL;
static UNROTATED_ONLY: [Orientation; 1] = [Orientation::Unrotated];

/// A scored placement option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index of the free rectangle in the pool.
    pub index: usize,
    /// Orientation of the part.
    pub orientation: Orientation,
    /// Footprint reserved in the free rectangle (part plus kerf).
    pub footprint: Size,
    /// Short-side slack; lower is better.
    pub score: f64,
}

/// Leftover short side when `footprint` is placed in `free`.
pub fn short_side_slack(free: &Rect, footprint: Size) -> f64 {
    (free.width - footprint.width).min(free.height - footprint.height)
}

/// Returns true if `footprint` fits in `free`, within rounding tolerance.
pub fn fits(free: &Rect, footprint: Size) -> bool {
    free.width + FIT_EPS >= footprint.width && free.height + FIT_EPS >= footprint.height
}

/// Orientations tried for a part of `size`.
///
/// A square part is only tried unrotated since turning it changes nothing.
pub fn orientations(size: Size, allow_rotation: bool) -> &'static [Orientation] {
    if allow_rotation && !size.is_square() {
        &BOTH
    } else {
        &UNROTATED_ONLY
    }
}

/// Finds the best free rectangle and orientation for a part.
///
/// `size` is the part's nominal size; `kerf` is added to both sides of the
/// footprint. Returns `None` if the part fits no free rectangle in any
/// allowed orientation.
pub fn find_best_fit(
    pool: &[Rect],
    size: Size,
    kerf: f64,
    allow_rotation: bool,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (index, free) in pool.iter().enumerate() {
        for &orientation in orientations(size, allow_rotation) {
            let footprint = orientation.apply(size).inflated(kerf);
            if !fits(free, footprint) {
                continue;
            }

            let score = short_side_slack(free, footprint);
            if best.map_or(true, |b| score < b.score) {
                best = Some(Candidate {
                    index,
                    orientation,
                    footprint,
                    score,
                });
            }
        }
    }

    best
}
