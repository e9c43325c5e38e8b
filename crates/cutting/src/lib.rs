//! Machine-program output for slabcut layouts.
//!
//! Given a finished layout, this crate plans the order in which parts are
//! cut and renders it for the shop floor:
//!
//! - **Cut planning** ([`plan_cuts`]): kerf-compensated rectangular contours
//!   in layout sequence order, with rapid/cut distances and a time estimate
//! - **G-code** ([`generate_gcode`]): metric absolute program with multi-pass
//!   depth stepping
//! - **Cut list** ([`cut_list`]): CSV listing of placements and unplaced parts
//!
//! Machine coordinates put the origin at the sheet's front-left corner with
//! `Y` growing away from the operator, which flips the layout's `y` axis.

pub mod config;
pub mod cut_list;
pub mod gcode;
pub mod kerf;
pub mod path;
pub mod result;

pub use config::{CutDirection, CuttingConfig};
pub use cut_list::cut_list;
pub use gcode::generate_gcode;
pub use path::plan_cuts;
pub use result::{CutStep, CuttingPathResult};
