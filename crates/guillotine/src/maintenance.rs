//! Free-rectangle maintenance.
//!
//! Pruning keeps the pool free of slivers no part could ever occupy.
//! Merging is an optional size reduction; guillotine splitting never needs
//! it for correctness.

use slabcut_core::Rect;

/// Tolerance for edge coincidence when merging.
const MERGE_EPS: f64 = 1e-9;

/// Removes free rectangles with a side below `min_size` or of zero extent.
///
/// Order of the remaining rectangles is preserved. Returns the number of
/// rectangles removed.
pub fn prune(pool: &mut Vec<Rect>, min_size: f64) -> usize {
    let before = pool.len();
    pool.retain(|r| !r.is_degenerate(min_size));
    before - pool.len()
}

/// Coalesces pairs of free rectangles that share a full edge.
///
/// The union of two disjoint rectangles sharing a full edge is a rectangle
/// covering exactly the same area, so disjointness of the pool is preserved.
/// The merged rectangle takes the position of the earlier of the two.
/// Returns the number of merges performed.
pub fn merge_adjacent(pool: &mut Vec<Rect>) -> usize {
    let mut merges = 0;
    'outer: loop {
        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                if let Some(merged) = try_merge(&pool[i], &pool[j]) {
                    pool[i] = merged;
                    pool.remove(j);
                    merges += 1;
                    continue 'outer;
                }
            }
        }
        break;
    }
    merges
}

/// Returns the union of `a` and `b` if they share a full edge.
fn try_merge(a: &Rect, b: &Rect) -> Option<Rect> {
    let same_column = close(a.x, b.x) && close(a.width, b.width);
    if same_column {
        if close(a.bottom(), b.y) {
            return Some(Rect::new(a.x, a.y, a.width, a.height + b.height));
        }
        if close(b.bottom(), a.y) {
            return Some(Rect::new(a.x, b.y, a.width, a.height + b.height));
        }
    }

    let same_row = close(a.y, b.y) && close(a.height, b.height);
    if same_row {
        if close(a.right(), b.x) {
            return Some(Rect::new(a.x, a.y, a.width + b.width, a.height));
        }
        if close(b.right(), a.x) {
            return Some(Rect::new(b.x, a.y, a.width + b.width, a.height));
        }
    }

    None
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= MERGE_EPS
}
