//! Kerf (blade width) compensation for rectangular parts.
//!
//! The tool center travels outside the part, offset by `kerf/2`, so the
//! blade removes material only from the kerf gap reserved during layout and
//! the finished part keeps its nominal dimensions.

use slabcut_core::{PlacedPart, Rect};

/// Returns the tool-center path around a placed part, in sheet coordinates.
///
/// A zero or negative kerf leaves the part outline unchanged.
///
/// Layout reserves kerf only to the right of and below each part, so a part
/// placed against a zero margin gets a path that runs `kerf/2` outside the
/// sheet on its left and top edges. That pass trims the raw sheet edge; give
/// the sheet a margin of at least `kerf/2` to keep every path on the stock.
pub fn tool_path_rect(part: &PlacedPart, kerf: f64) -> Rect {
    let half = kerf.max(0.0) / 2.0;
    Rect::new(
        part.x - half,
        part.y - half,
        part.width + 2.0 * half,
        part.height + 2.0 * half,
    )
}
