//! # Slabcut Core
//!
//! Shared types for the slabcut sheet-cutting layout engine.
//!
//! This crate holds the data model exchanged between the layout engine
//! (`slabcut-guillotine`), machine-program output (`slabcut-cutting`) and
//! any host application.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Rect`], [`Size`], [`Orientation`]
//! - **Inputs**: [`Sheet`], [`Part`], [`RotationConstraint`]
//! - **Configuration**: [`LayoutConfig`]
//! - **Outputs**: [`LayoutResult`], [`PlacedPart`], [`LayoutSummary`]
//!
//! ## Coordinates
//!
//! Sheet coordinates are millimeters with the origin at the top-left corner
//! of the sheet and `y` growing downward.
//!
//! ```rust
//! use slabcut_core::{Part, Sheet};
//!
//! let sheet = Sheet::new(2440.0, 1220.0).with_margin(10.0).with_kerf(3.2);
//! assert!(sheet.validate().is_ok());
//!
//! let side = Part::from_box("side-l", 720.0, 18.0, 560.0).with_name("Left side");
//! assert_eq!((side.width, side.height), (720.0, 560.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geometry;
pub mod result;
pub mod sheet;

// Re-exports
pub use config::{LayoutConfig, DEFAULT_MIN_USABLE_SIZE};
pub use error::{Error, Result};
pub use geometry::{Orientation, Rect, Size};
pub use result::{efficiency_percent, LayoutResult, LayoutSummary, PlacedPart};
pub use sheet::{Part, PartId, RotationConstraint, Sheet};
