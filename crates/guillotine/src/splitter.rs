//! Guillotine splitting of free rectangles.
//!
//! Placing a footprint at the top-left corner of a free rectangle leaves an
//! L-shaped remainder. A guillotine saw can only make straight, full-length
//! cuts, so the remainder is divided into two rectangles:
//!
//! ```text
//! +-----------+--------+
//! | footprint | right  |
//! +-----------+--------+
//! |       bottom       |
//! +--------------------+
//! ```
//!
//! The right remainder spans the footprint's height; the bottom remainder
//! spans the full width of the original free rectangle. The two are disjoint
//! and, together with the footprint, tile the original rectangle exactly.

use slabcut_core::{Rect, Size};

/// Remainders produced by one guillotine split.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Split {
    /// Strip to the right of the footprint, as tall as the footprint.
    pub right: Option<Rect>,
    /// Strip below the footprint, as wide as the original rectangle.
    pub bottom: Option<Rect>,
}

impl Split {
    /// Returns the surviving remainders, right first.
    pub fn rects(&self) -> impl Iterator<Item = Rect> {
        self.right.into_iter().chain(self.bottom)
    }

    /// Number of surviving remainders (0 - 2).
    pub fn len(&self) -> usize {
        self.right.is_some() as usize + self.bottom.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `free` around a footprint anchored at its top-left corner.
///
/// Remainders with a side below `min_size` are discarded as slivers, as are
/// remainders with no extent.
/// The footprint must fit inside `free`.
pub fn split(free: &Rect, footprint: Size, min_size: f64) -> Split {
    let right = Rect::new(
        free.x + footprint.width,
        free.y,
        free.width - footprint.width,
        footprint.height,
    );
    let bottom = Rect::new(
        free.x,
        free.y + footprint.height,
        free.width,
        free.height - footprint.height,
    );

    Split {
        right: (!right.is_degenerate(min_size)).then_some(right),
        bottom: (!bottom.is_degenerate(min_size)).then_some(bottom),
    }
}
