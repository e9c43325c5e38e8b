//! G-code program output.
//!
//! Emits a plain RS-274 program (metric, absolute) that cuts every placed
//! part along its kerf-compensated outline in layout order:
//!
//! ```text
//! G0 Z<safe>            retract
//! G0 X.. Y..            rapid to plunge corner
//! G1 Z-<pass> F<plunge> plunge, repeated per pass
//! G1 X.. Y.. F<feed>    four contour edges
//! ```

use std::fmt::Write;

use slabcut_core::{Error, LayoutResult, Result, Sheet};

use crate::config::CuttingConfig;
use crate::path::plan_cuts;
use crate::result::CuttingPathResult;

/// Generates a G-code program for a layout.
pub fn generate_gcode(
    layout: &LayoutResult,
    sheet: &Sheet,
    config: &CuttingConfig,
) -> Result<String> {
    let plan = plan_cuts(layout, sheet, config)?;
    let mut output = String::new();
    write_program(&mut output, layout, sheet, &plan, config)
        .map_err(|e| Error::Internal(format!("failed to format G-code: {}", e)))?;
    Ok(output)
}

fn write_program(
    out: &mut String,
    layout: &LayoutResult,
    sheet: &Sheet,
    plan: &CuttingPathResult,
    config: &CuttingConfig,
) -> std::fmt::Result {
    let d = config.decimals;

    writeln!(out, "({})", sanitize_comment(&config.program_name))?;
    writeln!(
        out,
        "(Sheet {}x{} margin {} kerf {})",
        fmt_coord(sheet.width, d),
        fmt_coord(sheet.height, d),
        fmt_coord(sheet.margin, d),
        fmt_coord(sheet.kerf, d)
    )?;
    writeln!(
        out,
        "(Parts {} placed, {} unplaced, efficiency {}%)",
        layout.placed_count(),
        layout.unplaced_count(),
        layout.efficiency
    )?;
    writeln!(out, "G21")?;
    writeln!(out, "G90")?;
    writeln!(out, "G0 Z{}", fmt_coord(config.safe_z, d))?;

    for step in &plan.steps {
        let name = layout
            .placed
            .iter()
            .find(|p| p.sequence == step.sequence)
            .map(|p| p.name.as_str())
            .unwrap_or("");
        writeln!(out)?;
        if name.is_empty() {
            writeln!(out, "(#{} {})", step.sequence, sanitize_comment(&step.part_id))?;
        } else {
            writeln!(
                out,
                "(#{} {} {})",
                step.sequence,
                sanitize_comment(&step.part_id),
                sanitize_comment(name)
            )?;
        }

        let (sx, sy) = step.start();
        writeln!(out, "G0 X{} Y{}", fmt_coord(sx, d), fmt_coord(sy, d))?;

        for pass in 1..=step.passes {
            writeln!(
                out,
                "G1 Z{} F{}",
                fmt_coord(-config.pass_z(pass), d),
                fmt_coord(config.plunge_rate, 0)
            )?;
            for (i, &(x, y)) in step.contour.iter().enumerate().skip(1) {
                if i == 1 {
                    writeln!(
                        out,
                        "G1 X{} Y{} F{}",
                        fmt_coord(x, d),
                        fmt_coord(y, d),
                        fmt_coord(config.feed_rate, 0)
                    )?;
                } else {
                    writeln!(out, "G1 X{} Y{}", fmt_coord(x, d), fmt_coord(y, d))?;
                }
            }
            writeln!(out, "G1 X{} Y{}", fmt_coord(sx, d), fmt_coord(sy, d))?;
        }

        writeln!(out, "G0 Z{}", fmt_coord(config.safe_z, d))?;
    }

    writeln!(out)?;
    let (hx, hy) = config.home_position;
    writeln!(out, "G0 X{} Y{}", fmt_coord(hx, d), fmt_coord(hy, d))?;
    writeln!(out, "M5")?;
    writeln!(out, "M30")?;
    Ok(())
}

/// Formats a coordinate with `decimals` digits, without a negative zero.
pub fn fmt_coord(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Parentheses end a G-code comment early and a line break ends the block,
/// so both are kept out of comment text.
fn sanitize_comment(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
