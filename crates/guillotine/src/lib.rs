//! # Slabcut Guillotine
//!
//! Guillotine sheet-cutting layout for rectangular parts.
//!
//! Given a raw sheet (width, height, margin, kerf) and a list of parts, the
//! engine computes non-overlapping placements, a cut sequence and the
//! material efficiency. It is a greedy heuristic, not an optimal packer:
//!
//! 1. **Ordering**: parts are sorted by descending area (stable)
//! 2. **Placement**: Best Short-Side Fit over all free rectangles, trying
//!    both orientations unless the part is rotation-locked
//! 3. **Splitting**: the chosen free rectangle is replaced by its right and
//!    bottom guillotine remainders
//! 4. **Maintenance**: slivers are pruned, optional edge merging
//!
//! Parts that fit nowhere are listed in [`LayoutResult::unplaced`]; they never
//! abort the layout.
//!
//! ## Quick Start
//!
//! ```rust
//! use slabcut_guillotine::{compute_layout, Part, Sheet};
//!
//! let sheet = Sheet::new(1000.0, 1000.0).with_margin(10.0).with_kerf(2.0);
//! let parts = vec![Part::new("P1", 100.0, 100.0).with_name("Drawer front")];
//!
//! let result = compute_layout(&sheet, &parts).unwrap();
//! assert_eq!((result.placed[0].x, result.placed[0].y), (10.0, 10.0));
//! assert_eq!(result.efficiency, 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod batch;
pub mod free_space;
pub mod layout;
pub mod maintenance;
pub mod placement;
pub mod splitter;

// Re-exports
pub use batch::{compute_layouts, LayoutJob};
pub use free_space::FreeSpacePool;
pub use layout::{compute_layout, GuillotineLayouter};
pub use placement::{find_best_fit, Candidate};
pub use slabcut_core::{
    Error, LayoutConfig, LayoutResult, LayoutSummary, Orientation, Part, PartId, PlacedPart,
    Rect, Result, RotationConstraint, Sheet, Size,
};
pub use splitter::{split, Split};
