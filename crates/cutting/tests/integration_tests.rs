//! Integration tests for slabcut-cutting.

use slabcut_cutting::{cut_list, generate_gcode, plan_cuts, CutDirection, CuttingConfig};
use slabcut_guillotine::{compute_layout, Part, Sheet};

fn cabinet_job() -> (Sheet, Vec<Part>) {
    let sheet = Sheet::new(2440.0, 1220.0).with_margin(10.0).with_kerf(3.2);
    let parts = vec![
        Part::from_box("side-l", 720.0, 18.0, 560.0).with_name("Left side"),
        Part::from_box("side-r", 720.0, 18.0, 560.0).with_name("Right side"),
        Part::new("bottom", 764.0, 560.0).with_name("Bottom"),
        Part::new("shelf", 764.0, 540.0).with_name("Shelf"),
        Part::new("back", 800.0, 720.0).with_name("Back"),
        Part::new("huge", 3000.0, 100.0).with_name("Too long"),
    ];
    (sheet, parts)
}

#[test]
fn test_plan_covers_every_placed_part() {
    let (sheet, parts) = cabinet_job();
    let layout = compute_layout(&sheet, &parts).unwrap();
    let plan = plan_cuts(&layout, &sheet, &CuttingConfig::default()).unwrap();

    assert_eq!(plan.steps.len(), layout.placed.len());
    for (i, step) in plan.steps.iter().enumerate() {
        assert_eq!(step.sequence, i + 1);
    }
    assert!(plan.total_cut_distance > 0.0);
    assert!(plan.estimated_time_seconds > 0.0);
}

#[test]
fn test_contours_stay_on_sheet() {
    let (sheet, parts) = cabinet_job();
    let layout = compute_layout(&sheet, &parts).unwrap();
    let config = CuttingConfig::new().with_direction(CutDirection::Cw);
    let plan = plan_cuts(&layout, &sheet, &config).unwrap();

    for step in &plan.steps {
        for &(x, y) in &step.contour {
            assert!(x >= 0.0 && x <= sheet.width, "{} x={}", step.part_id, x);
            assert!(y >= 0.0 && y <= sheet.height, "{} y={}", step.part_id, y);
        }
    }
}

#[test]
fn test_gcode_mentions_each_part_once() {
    let (sheet, parts) = cabinet_job();
    let layout = compute_layout(&sheet, &parts).unwrap();
    let gcode = generate_gcode(&layout, &sheet, &CuttingConfig::default()).unwrap();

    for placed in &layout.placed {
        let marker = format!("(#{} {} ", placed.sequence, placed.part_id);
        assert_eq!(gcode.matches(&marker).count(), 1, "{}", marker);
    }
    assert!(!gcode.contains("huge"));
}

#[test]
fn test_cut_list_accounts_for_all_parts() {
    let (sheet, parts) = cabinet_job();
    let layout = compute_layout(&sheet, &parts).unwrap();
    let text = cut_list(&layout);

    // Header plus one row per requested part.
    assert_eq!(text.lines().count(), parts.len() + 1);
    assert!(text.contains("-,huge,UNPLACED"));
}

#[test]
fn test_zero_margin_paths_overhang_by_half_kerf() {
    let sheet = Sheet::new(1000.0, 500.0).with_kerf(4.0);
    let parts = vec![Part::new("A", 300.0, 200.0), Part::new("B", 300.0, 200.0)];
    let layout = compute_layout(&sheet, &parts).unwrap();
    let plan = plan_cuts(&layout, &sheet, &CuttingConfig::default()).unwrap();

    // First part sits in the sheet corner: its left and back edges are cut
    // half a kerf outside the stock.
    let first = &plan.steps[0];
    assert_eq!(first.start(), (-2.0, 500.0 - 202.0));
    let back = first.contour.iter().map(|c| c.1).fold(f64::MIN, f64::max);
    assert_eq!(back, 502.0);

    // Interior edges never leave the sheet.
    for step in &plan.steps {
        for &(x, y) in &step.contour {
            assert!(x >= -2.0 && x <= sheet.width - 2.0, "{} x={}", step.part_id, x);
            assert!(y >= 2.0 && y <= sheet.height + 2.0, "{} y={}", step.part_id, y);
        }
    }
}
