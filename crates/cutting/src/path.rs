//! Cut planning: turns a layout into an ordered list of contour cuts.

use slabcut_core::{LayoutResult, Rect, Result, Sheet};

use crate::config::{CutDirection, CuttingConfig};
use crate::kerf::tool_path_rect;
use crate::result::{CutStep, CuttingPathResult};

/// Plans the cutting of every placed part in layout `sequence` order.
///
/// Contours are the kerf-compensated part outlines converted to machine
/// coordinates, where `Y` grows upward from the sheet's front-left corner.
/// Distances and the time estimate include the final return to
/// `config.home_position`.
pub fn plan_cuts(
    layout: &LayoutResult,
    sheet: &Sheet,
    config: &CuttingConfig,
) -> Result<CuttingPathResult> {
    config.validate()?;
    sheet.validate()?;

    let mut placed: Vec<_> = layout.placed.iter().collect();
    placed.sort_by_key(|p| p.sequence);

    let passes = config.passes();
    let mut result = CuttingPathResult::new();
    let mut position = config.home_position;

    for part in placed {
        let path = tool_path_rect(part, sheet.kerf);
        let contour = machine_contour(&path, sheet.height, config.direction);
        let rapid_distance = distance(position, contour[0]);
        let cut_distance = 2.0 * (path.width + path.height) * passes as f64;

        position = contour[0];
        result.total_rapid_distance += rapid_distance;
        result.total_cut_distance += cut_distance;
        result.total_passes += passes;
        result.steps.push(CutStep {
            part_id: part.part_id.clone(),
            sequence: part.sequence,
            contour,
            direction: config.direction,
            rapid_distance,
            cut_distance,
            passes,
        });
    }

    if !result.steps.is_empty() {
        result.total_rapid_distance += distance(position, config.home_position);
    }

    result.estimated_time_seconds = 60.0
        * (result.total_cut_distance / config.feed_rate
            + result.total_rapid_distance / config.rapid_rate
            + result.total_passes as f64 * config.cut_depth.min(config.pass_depth)
                / config.plunge_rate);

    log::debug!(
        "Planned {} cuts: {:.1} mm cutting, {:.1} mm rapid",
        result.steps.len(),
        result.total_cut_distance,
        result.total_rapid_distance
    );

    Ok(result)
}

/// Converts a sheet-coordinate rectangle into machine-coordinate corners.
///
/// Travel starts at the front-left corner.
pub fn machine_contour(
    rect: &Rect,
    sheet_height: f64,
    direction: CutDirection,
) -> [(f64, f64); 4] {
    let x0 = rect.x;
    let x1 = rect.right();
    let y_front = sheet_height - rect.bottom();
    let y_back = sheet_height - rect.y;

    match direction {
        CutDirection::Ccw => [(x0, y_front), (x1, y_front), (x1, y_back), (x0, y_back)],
        CutDirection::Cw => [(x0, y_front), (x0, y_back), (x1, y_back), (x1, y_front)],
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
