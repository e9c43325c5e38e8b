//! Layout configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default smallest free-rectangle side worth keeping, in millimeters.
pub const DEFAULT_MIN_USABLE_SIZE: f64 = 1.0;

/// Configuration for the guillotine layout engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Free rectangles with a side below this size are discarded as
    /// slivers. The effective threshold never drops below the sheet kerf.
    pub min_usable_size: f64,

    /// Global switch for 90-degree rotation. When false every part keeps
    /// its nominal orientation regardless of its own constraint.
    pub allow_rotation: bool,

    /// Coalesce free rectangles that share a full edge after each split.
    pub merge_free_rects: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_usable_size: DEFAULT_MIN_USABLE_SIZE,
            allow_rotation: true,
            merge_free_rects: false,
        }
    }
}

impl LayoutConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sliver threshold.
    pub fn with_min_usable_size(mut self, size: f64) -> Self {
        self.min_usable_size = size;
        self
    }

    /// Enables or disables rotation for all parts.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    /// Enables or disables free-rectangle merging.
    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge_free_rects = merge;
        self
    }

    /// Returns the sliver threshold used for a sheet with the given kerf.
    pub fn sliver_threshold(&self, kerf: f64) -> f64 {
        self.min_usable_size.max(kerf)
    }

    /// Checks that all values are in range.
    pub fn validate(&self) -> Result<()> {
        if !self.min_usable_size.is_finite() || self.min_usable_size < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_usable_size must be a non-negative number, got {}",
                self.min_usable_size
            )));
        }
        Ok(())
    }
}
