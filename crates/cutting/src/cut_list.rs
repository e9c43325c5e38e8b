//! Plain-text cut list for the shop floor.

use slabcut_core::LayoutResult;

/// Column header of [`cut_list`].
pub const CUT_LIST_HEADER: &str = "sequence,part_id,name,x,y,width,height,rotated";

/// Renders a layout as CSV, one row per placement in cut order.
///
/// Unplaced parts follow as `-,<id>,UNPLACED,,,,,` rows so the list always
/// accounts for every requested part.
pub fn cut_list(layout: &LayoutResult) -> String {
    let mut rows = vec![CUT_LIST_HEADER.to_string()];

    let mut placed: Vec<_> = layout.placed.iter().collect();
    placed.sort_by_key(|p| p.sequence);
    for p in placed {
        rows.push(format!(
            "{},{},{},{},{},{},{},{}",
            p.sequence,
            csv_field(&p.part_id),
            csv_field(&p.name),
            p.x,
            p.y,
            p.width,
            p.height,
            if p.rotated { "yes" } else { "no" }
        ));
    }

    for id in &layout.unplaced {
        rows.push(format!("-,{},UNPLACED,,,,,", csv_field(id)));
    }

    rows.join("\n") + "\n"
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
