//! Raw sheet and part definitions.

use crate::geometry::{Rect, Size};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a part, unique within one layout request.
pub type PartId = String;

/// A raw sheet (slab) of material to be cut.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// Sheet width in millimeters.
    pub width: f64,

    /// Sheet height in millimeters.
    pub height: f64,

    /// Uniform border excluded from placement.
    #[cfg_attr(feature = "serde", serde(default))]
    pub margin: f64,

    /// Blade width consumed around every placed part.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kerf: f64,
}

impl Sheet {
    /// Creates a sheet with no margin and no kerf.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: 0.0,
            kerf: 0.0,
        }
    }

    /// Sets the border margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the blade kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Full sheet area, margins included.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the full sheet rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Returns the region available for placement (sheet minus margins).
    ///
    /// Call [`validate`](Self::validate) first; an invalid sheet yields `None`.
    pub fn usable_rect(&self) -> Option<Rect> {
        self.bounds().shrink(self.margin)
    }

    /// Area of the region inside the margins.
    pub fn usable_area(&self) -> f64 {
        self.usable_rect().map(|r| r.area()).unwrap_or(0.0)
    }

    /// Checks that the sheet can hold a layout.
    pub fn validate(&self) -> Result<()> {
        if !Size::new(self.width, self.height).is_valid() {
            return Err(Error::InvalidSheet(format!(
                "dimensions must be positive and finite, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::InvalidSheet(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(Error::InvalidSheet(format!(
                "kerf must be a non-negative number, got {}",
                self.kerf
            )));
        }
        if 2.0 * self.margin >= self.width || 2.0 * self.margin >= self.height {
            return Err(Error::InvalidSheet(format!(
                "margin {} leaves no usable area on a {}x{} sheet",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Whether a part may be turned by 90 degrees on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RotationConstraint {
    /// Either orientation may be used.
    #[default]
    Free,
    /// The part must keep its nominal orientation (grain-sensitive material).
    Fixed,
}

impl RotationConstraint {
    /// Returns true if only the nominal orientation is allowed.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed)
    }
}

/// A rectangular part to cut from the sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Unique identifier.
    pub id: PartId,

    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Nominal width in millimeters.
    pub width: f64,

    /// Nominal height in millimeters.
    pub height: f64,

    /// Marks the part the caller is focused on. Informational only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_current: bool,

    /// Allowed orientations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: RotationConstraint,
}

impl Part {
    /// Creates a part that may be rotated.
    pub fn new(id: impl Into<PartId>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            width,
            height,
            is_current: false,
            rotation: RotationConstraint::Free,
        }
    }

    /// Creates a part from a cabinet component's three dimensions.
    ///
    /// The cutting footprint is made of the two largest dimensions; the
    /// smallest is taken to be the material thickness.
    pub fn from_box(id: impl Into<PartId>, width: f64, height: f64, depth: f64) -> Self {
        let mut dims = [width, height, depth];
        dims.sort_by(|a, b| b.total_cmp(a));
        Self::new(id, dims[0], dims[1])
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the part as the current focus.
    pub fn with_current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }

    /// Sets the rotation constraint.
    pub fn with_rotation(mut self, rotation: RotationConstraint) -> Self {
        self.rotation = rotation;
        self
    }

    /// Nominal size (unrotated).
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Checks that the part has a usable footprint.
    pub fn validate(&self) -> Result<()> {
        if !self.size().is_valid() {
            return Err(Error::InvalidPart(format!(
                "part '{}' has non-positive dimensions {}x{}",
                self.id, self.width, self.height
            )));
        }
        Ok(())
    }
}
