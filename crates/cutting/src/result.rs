//! Result types for cut planning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use slabcut_core::PartId;

use crate::config::CutDirection;

/// Planned cutting order for a layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CuttingPathResult {
    /// Ordered cutting steps, one per placed part.
    pub steps: Vec<CutStep>,

    /// Total cutting distance over all passes.
    pub total_cut_distance: f64,

    /// Total non-cutting (rapid) distance, including the return home.
    pub total_rapid_distance: f64,

    /// Total number of plunges.
    pub total_passes: usize,

    /// Estimated machining time in seconds.
    pub estimated_time_seconds: f64,
}

impl CuttingPathResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            total_cut_distance: 0.0,
            total_rapid_distance: 0.0,
            total_passes: 0,
            estimated_time_seconds: 0.0,
        }
    }

    /// Returns the total distance (cutting + rapid).
    pub fn total_distance(&self) -> f64 {
        self.total_cut_distance + self.total_rapid_distance
    }

    /// Returns the cutting efficiency (cut distance / total distance).
    pub fn efficiency(&self) -> f64 {
        let total = self.total_distance();
        if total > 0.0 {
            self.total_cut_distance / total
        } else {
            0.0
        }
    }
}

impl Default for CuttingPathResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Cutting one placed part.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutStep {
    /// Identifier of the part being cut.
    pub part_id: PartId,

    /// Cut order copied from the layout (1-based).
    pub sequence: usize,

    /// Contour corners in machine coordinates, in travel order. The first
    /// corner is the plunge point; the path closes back onto it.
    pub contour: [(f64, f64); 4],

    /// Direction of travel around the contour.
    pub direction: CutDirection,

    /// Distance of the rapid move to the plunge point.
    pub rapid_distance: f64,

    /// Cutting distance over all passes.
    pub cut_distance: f64,

    /// Number of depth passes.
    pub passes: usize,
}

impl CutStep {
    /// Plunge point in machine coordinates.
    pub fn start(&self) -> (f64, f64) {
        self.contour[0]
    }
}
