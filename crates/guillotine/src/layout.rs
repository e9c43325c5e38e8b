//! Layout driver.

use slabcut_core::{Error, LayoutConfig, LayoutResult, Part, PlacedPart, Result, Sheet};

use crate::free_space::FreeSpacePool;
use crate::placement::find_best_fit;

/// Guillotine sheet layouter.
///
/// Places parts largest-area-first with the Best Short-Side Fit heuristic,
/// splitting the chosen free rectangle with a guillotine cut after every
/// placement. Each call to [`layout`](Self::layout) is an independent,
/// deterministic computation.
#[derive(Debug, Clone, Default)]
pub struct GuillotineLayouter {
    config: LayoutConfig,
}

impl GuillotineLayouter {
    /// Creates a new layouter with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Creates a layouter with default configuration.
    pub fn default_config() -> Self {
        Self::new(LayoutConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes the layout of `parts` on `sheet`.
    ///
    /// Fails only when the sheet or configuration is unusable. Parts with
    /// non-positive dimensions are reported as unplaced (in input order,
    /// ahead of parts that did not fit) without reaching the heuristic.
    pub fn layout(&self, sheet: &Sheet, parts: &[Part]) -> Result<LayoutResult> {
        self.config.validate()?;
        sheet.validate()?;

        let usable = sheet
            .usable_rect()
            .ok_or_else(|| Error::InvalidSheet("sheet has no usable area".into()))?;
        let min_size = self.config.sliver_threshold(sheet.kerf);

        let mut pool = FreeSpacePool::new(usable);
        let mut result = LayoutResult::new(sheet.area());

        let mut queue: Vec<&Part> = Vec::with_capacity(parts.len());
        for part in parts {
            match part.validate() {
                Ok(()) => queue.push(part),
                Err(e) => {
                    log::warn!("Rejecting part: {}", e);
                    result.unplaced.push(part.id.clone());
                }
            }
        }

        // Stable: equal areas keep their input order.
        queue.sort_by(|a, b| b.area().total_cmp(&a.area()));

        for part in queue {
            let allow_rotation = self.config.allow_rotation && !part.rotation.is_fixed();

            let Some(candidate) =
                find_best_fit(pool.rects(), part.size(), sheet.kerf, allow_rotation)
            else {
                log::warn!(
                    "Part '{}' ({}x{}) does not fit in the remaining free space",
                    part.id,
                    part.width,
                    part.height
                );
                result.unplaced.push(part.id.clone());
                continue;
            };

            let occupied = pool.commit(candidate.index, candidate.footprint, min_size)?;
            pool.prune(min_size);
            if self.config.merge_free_rects {
                pool.merge();
            }

            let size = candidate.orientation.apply(part.size());
            let sequence = result.placed.len() + 1;
            log::debug!(
                "Placed '{}' #{} at ({}, {}) {}x{}{}; {} free rects",
                part.id,
                sequence,
                occupied.x,
                occupied.y,
                size.width,
                size.height,
                if candidate.orientation.is_rotated() {
                    " rotated"
                } else {
                    ""
                },
                pool.len()
            );

            result.placed.push(PlacedPart {
                part_id: part.id.clone(),
                name: part.name.clone(),
                x: occupied.x,
                y: occupied.y,
                width: size.width,
                height: size.height,
                sequence,
                rotated: candidate.orientation.is_rotated(),
            });
        }

        result.update_efficiency();
        log::info!(
            "Layout finished: {} placed, {} unplaced, efficiency {}%",
            result.placed_count(),
            result.unplaced_count(),
            result.efficiency
        );

        Ok(result)
    }
}

/// Computes a layout with the default configuration.
pub fn compute_layout(sheet: &Sheet, parts: &[Part]) -> Result<LayoutResult> {
    GuillotineLayouter::default_config().layout(sheet, parts)
}
