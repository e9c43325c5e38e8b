//! Parallel layout of independent jobs.

use rayon::prelude::*;
use slabcut_core::{LayoutResult, Part, Result, Sheet};

use crate::layout::GuillotineLayouter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sheet and the parts to lay out on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutJob {
    pub sheet: Sheet,
    pub parts: Vec<Part>,
}

impl LayoutJob {
    pub fn new(sheet: Sheet, parts: Vec<Part>) -> Self {
        Self { sheet, parts }
    }
}

impl GuillotineLayouter {
    /// Lays out independent jobs in parallel.
    ///
    /// Results are returned in job order. Jobs share no state, so each result
    /// equals what [`layout`](Self::layout) returns for that job alone.
    pub fn layout_batch(&self, jobs: &[LayoutJob]) -> Vec<Result<LayoutResult>> {
        jobs.par_iter()
            .map(|job| self.layout(&job.sheet, &job.parts))
            .collect()
    }
}

/// Lays out independent jobs in parallel with the default configuration.
pub fn compute_layouts(jobs: &[LayoutJob]) -> Vec<Result<LayoutResult>> {
    GuillotineLayouter::default_config().layout_batch(jobs)
}
