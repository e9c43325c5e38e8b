//! Layout result representation.

use crate::geometry::Rect;
use crate::sheet::{PartId, Sheet};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance for geometric checks on finished layouts.
const CHECK_EPS: f64 = 1e-9;

/// A part committed to a position on the sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPart {
    /// Identifier of the source part.
    pub part_id: PartId,

    /// Display name of the source part.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Left edge of the part, kerf excluded.
    pub x: f64,

    /// Top edge of the part, kerf excluded.
    pub y: f64,

    /// Placed width (after rotation).
    pub width: f64,

    /// Placed height (after rotation).
    pub height: f64,

    /// 1-based cut order.
    pub sequence: usize,

    /// Whether the part was turned by 90 degrees.
    pub rotated: bool,
}

impl PlacedPart {
    /// Returns the part's rectangle, kerf excluded.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Returns the rectangle reserved during allocation (part plus kerf).
    pub fn kerf_footprint(&self, kerf: f64) -> Rect {
        Rect::new(self.x, self.y, self.width + kerf, self.height + kerf)
    }

    /// Returns the part's rectangle multiplied by a display scale.
    pub fn scaled(&self, scale: f64) -> Rect {
        self.rect().scaled(scale)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Outcome of one layout computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutResult {
    /// Placements in cut order.
    pub placed: Vec<PlacedPart>,

    /// Parts that could not be placed.
    pub unplaced: Vec<PartId>,

    /// Placed area over sheet area, as a rounded percentage (0 - 100).
    pub efficiency: u32,

    /// Total area of placed parts.
    pub placed_area: f64,

    /// Full sheet area the efficiency is measured against.
    pub sheet_area: f64,
}

impl LayoutResult {
    /// Creates an empty result for a sheet of the given area.
    pub fn new(sheet_area: f64) -> Self {
        Self {
            placed: Vec::new(),
            unplaced: Vec::new(),
            efficiency: 0,
            placed_area: 0.0,
            sheet_area,
        }
    }

    /// Recomputes `placed_area` and `efficiency` from the placements.
    pub fn update_efficiency(&mut self) {
        self.placed_area = self.placed.iter().map(PlacedPart::area).sum();
        self.efficiency = efficiency_percent(self.placed_area, self.sheet_area);
    }

    /// Returns true if every part was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns the placement of a part, if it was placed.
    pub fn find(&self, part_id: &str) -> Option<&PlacedPart> {
        self.placed.iter().find(|p| p.part_id == part_id)
    }

    /// Unrounded utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.sheet_area > 0.0 {
            self.placed_area / self.sheet_area
        } else {
            0.0
        }
    }

    /// Area of the sheet not covered by parts.
    pub fn waste_area(&self) -> f64 {
        (self.sheet_area - self.placed_area).max(0.0)
    }

    /// Builds summary statistics.
    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary::from(self)
    }

    /// Checks the layout against the sheet it was computed for.
    ///
    /// Verifies cut order, containment within the margins, pairwise
    /// separation of kerf footprints and the efficiency figure.
    pub fn validate(&self, sheet: &Sheet) -> Result<()> {
        let usable = sheet
            .usable_rect()
            .ok_or_else(|| Error::InvalidSheet("sheet has no usable area".into()))?;

        for (i, placed) in self.placed.iter().enumerate() {
            if placed.sequence != i + 1 {
                return Err(Error::Internal(format!(
                    "part '{}' has sequence {} at position {}",
                    placed.part_id,
                    placed.sequence,
                    i + 1
                )));
            }

            let footprint = placed.kerf_footprint(sheet.kerf);
            if footprint.x < usable.x - CHECK_EPS
                || footprint.y < usable.y - CHECK_EPS
                || footprint.right() > usable.right() + CHECK_EPS
                || footprint.bottom() > usable.bottom() + CHECK_EPS
            {
                return Err(Error::Internal(format!(
                    "part '{}' lies outside the usable area",
                    placed.part_id
                )));
            }
        }

        for (i, a) in self.placed.iter().enumerate() {
            let fa = a.kerf_footprint(sheet.kerf);
            for b in &self.placed[i + 1..] {
                let fb = b.kerf_footprint(sheet.kerf);
                let overlap_w = fa.right().min(fb.right()) - fa.x.max(fb.x);
                let overlap_h = fa.bottom().min(fb.bottom()) - fa.y.max(fb.y);
                if overlap_w > CHECK_EPS && overlap_h > CHECK_EPS {
                    return Err(Error::Internal(format!(
                        "parts '{}' and '{}' overlap",
                        a.part_id, b.part_id
                    )));
                }
            }
        }

        let placed_area: f64 = self.placed.iter().map(PlacedPart::area).sum();
        if self.efficiency != efficiency_percent(placed_area, sheet.area()) {
            return Err(Error::Internal(format!(
                "efficiency {} does not match placed area {}",
                self.efficiency, placed_area
            )));
        }

        Ok(())
    }
}

/// Rounded percentage of `sheet_area` covered by `placed_area`.
pub fn efficiency_percent(placed_area: f64, sheet_area: f64) -> u32 {
    if sheet_area <= 0.0 || !sheet_area.is_finite() {
        return 0;
    }
    (100.0 * placed_area / sheet_area).round().clamp(0.0, 100.0) as u32
}

/// Summary statistics for a layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSummary {
    /// Parts requested (placed + unplaced).
    pub total_parts: usize,
    /// Parts placed.
    pub placed: usize,
    /// Parts that did not fit or were rejected.
    pub unplaced: usize,
    /// Parts turned by 90 degrees.
    pub rotated: usize,
    /// Efficiency percentage.
    pub efficiency: u32,
    /// Sheet area not covered by parts.
    pub waste_area: f64,
}

impl From<&LayoutResult> for LayoutSummary {
    fn from(result: &LayoutResult) -> Self {
        Self {
            total_parts: result.placed.len() + result.unplaced.len(),
            placed: result.placed.len(),
            unplaced: result.unplaced.len(),
            rotated: result.placed.iter().filter(|p| p.rotated).count(),
            efficiency: result.efficiency,
            waste_area: result.waste_area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn placed(id: &str, x: f64, y: f64, w: f64, h: f64, sequence: usize) -> PlacedPart {
        PlacedPart {
            part_id: id.to_string(),
            name: String::new(),
            x,
            y,
            width: w,
            height: h,
            sequence,
            rotated: false,
        }
    }

    #[test]
    fn test_result_new() {
        let result = LayoutResult::new(1_000_000.0);
        assert!(result.placed.is_empty());
        assert!(result.all_placed());
        assert_eq!(result.efficiency, 0);
        assert_eq!(result.utilization(), 0.0);
    }

    #[test]
    fn test_efficiency_percent() {
        assert_eq!(efficiency_percent(10_000.0, 1_000_000.0), 1);
        assert_eq!(efficiency_percent(4_950.0, 10_000.0), 50);
        assert_eq!(efficiency_percent(4_949.0, 10_000.0), 49);
        assert_eq!(efficiency_percent(10_000.0, 10_000.0), 100);
        assert_eq!(efficiency_percent(1.0, 0.0), 0);
    }

    #[test]
    fn test_update_efficiency() {
        let mut result = LayoutResult::new(1_000_000.0);
        result.placed.push(placed("A", 0.0, 0.0, 600.0, 600.0, 1));
        result.placed.push(placed("B", 600.0, 0.0, 400.0, 600.0, 2));
        result.update_efficiency();

        assert_relative_eq!(result.placed_area, 600_000.0);
        assert_eq!(result.efficiency, 60);
        assert_relative_eq!(result.utilization(), 0.6);
        assert_relative_eq!(result.waste_area(), 400_000.0);
    }

    #[test]
    fn test_summary() {
        let mut result = LayoutResult::new(10_000.0);
        let mut rotated = placed("A", 0.0, 0.0, 20.0, 50.0, 1);
        rotated.rotated = true;
        result.placed.push(rotated);
        result.unplaced.push("B".to_string());
        result.update_efficiency();

        let summary = result.summary();
        assert_eq!(summary.total_parts, 2);
        assert_eq!(summary.placed, 1);
        assert_eq!(summary.unplaced, 1);
        assert_eq!(summary.rotated, 1);
        assert_eq!(summary.efficiency, 10);
    }

    #[test]
    fn test_find() {
        let mut result = LayoutResult::new(100.0);
        result.placed.push(placed("A", 0.0, 0.0, 5.0, 5.0, 1));
        assert!(result.find("A").is_some());
        assert!(result.find("Z").is_none());
    }

    #[test]
    fn test_validate_accepts_touching_footprints() {
        let sheet = Sheet::new(100.0, 100.0).with_kerf(2.0);
        let mut result = LayoutResult::new(sheet.area());
        result.placed.push(placed("A", 0.0, 0.0, 48.0, 48.0, 1));
        result.placed.push(placed("B", 50.0, 0.0, 48.0, 48.0, 2));
        result.update_efficiency();
        assert!(result.validate(&sheet).is_ok());
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let sheet = Sheet::new(100.0, 100.0).with_kerf(2.0);
        let mut result = LayoutResult::new(sheet.area());
        result.placed.push(placed("A", 0.0, 0.0, 48.0, 48.0, 1));
        result.placed.push(placed("B", 49.0, 0.0, 40.0, 40.0, 2));
        result.update_efficiency();
        assert!(result.validate(&sheet).is_err());
    }

    #[test]
    fn test_validate_rejects_margin_violation() {
        let sheet = Sheet::new(100.0, 100.0).with_margin(10.0);
        let mut result = LayoutResult::new(sheet.area());
        result.placed.push(placed("A", 5.0, 10.0, 20.0, 20.0, 1));
        result.update_efficiency();
        assert!(result.validate(&sheet).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_sequence() {
        let sheet = Sheet::new(100.0, 100.0);
        let mut result = LayoutResult::new(sheet.area());
        result.placed.push(placed("A", 0.0, 0.0, 10.0, 10.0, 2));
        result.update_efficiency();
        assert!(result.validate(&sheet).is_err());
    }

    #[test]
    fn test_placed_part_footprints() {
        let p = placed("A", 10.0, 10.0, 100.0, 50.0, 1);
        assert_eq!(p.rect(), Rect::new(10.0, 10.0, 100.0, 50.0));
        assert_eq!(p.kerf_footprint(2.0), Rect::new(10.0, 10.0, 102.0, 52.0));
        assert_eq!(p.scaled(0.5), Rect::new(5.0, 5.0, 50.0, 25.0));
    }
}
