//! Pool of free rectangles available for placement.

use slabcut_core::{Error, Rect, Result, Size};

use crate::maintenance;
use crate::placement::FIT_EPS;
use crate::splitter::split;

/// The set of disjoint free rectangles of a sheet.
///
/// Starts as the sheet's usable area and changes only through
/// [`commit`](Self::commit), [`prune`](Self::prune) and [`merge`](Self::merge).
/// Order carries no meaning beyond being the scan order of the placement
/// heuristic, which makes it part of the layout's determinism.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeSpacePool {
    rects: Vec<Rect>,
}

impl FreeSpacePool {
    /// Creates a pool holding a single free rectangle.
    pub fn new(usable: Rect) -> Self {
        Self {
            rects: vec![usable],
        }
    }

    /// Returns the free rectangles in scan order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Total free area.
    pub fn total_area(&self) -> f64 {
        self.rects.iter().map(Rect::area).sum()
    }

    /// Places a footprint at the top-left corner of the free rectangle at
    /// `index` and replaces that rectangle with its guillotine remainders.
    ///
    /// The right remainder takes the chosen slot and the bottom remainder is
    /// inserted directly after it. Remainders narrower than `min_size` are
    /// dropped. Returns the rectangle now occupied by the footprint.
    pub fn commit(&mut self, index: usize, footprint: Size, min_size: f64) -> Result<Rect> {
        let free = *self.rects.get(index).ok_or_else(|| {
            Error::Internal(format!(
                "free rectangle {} out of range (pool has {})",
                index,
                self.rects.len()
            ))
        })?;

        if footprint.width > free.width + FIT_EPS || footprint.height > free.height + FIT_EPS {
            return Err(Error::Internal(format!(
                "footprint {}x{} does not fit free rectangle {}x{}",
                footprint.width, footprint.height, free.width, free.height
            )));
        }

        let occupied = Rect::from_size(free.x, free.y, footprint);
        let remainders = split(&free, footprint, min_size);

        match (remainders.right, remainders.bottom) {
            (Some(right), Some(bottom)) => {
                self.rects[index] = right;
                self.rects.insert(index + 1, bottom);
            }
            (Some(only), None) | (None, Some(only)) => {
                self.rects[index] = only;
            }
            (None, None) => {
                self.rects.remove(index);
            }
        }

        Ok(occupied)
    }

    /// Drops slivers. Returns the number of rectangles removed.
    pub fn prune(&mut self, min_size: f64) -> usize {
        maintenance::prune(&mut self.rects, min_size)
    }

    /// Merges rectangles sharing a full edge. Returns the number of merges.
    pub fn merge(&mut self) -> usize {
        maintenance::merge_adjacent(&mut self.rects)
    }

    /// Returns true if no two free rectangles overlap.
    pub fn is_disjoint(&self) -> bool {
        self.rects
            .iter()
            .enumerate()
            .all(|(i, a)| self.rects[i + 1..].iter().all(|b| !a.overlaps(b)))
    }
}
