//! Axis-aligned geometry primitives.
//!
//! All coordinates are sheet coordinates in millimeters with the origin at the
//! sheet's top-left corner and `y` growing downward.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A width/height pair without a position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    /// Extent along the x-axis.
    pub width: f64,
    /// Extent along the y-axis.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the size turned by 90 degrees.
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Returns the size grown by `amount` on both axes.
    pub fn inflated(&self, amount: f64) -> Self {
        Self {
            width: self.width + amount,
            height: self.height + amount,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if both extents are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Returns true if width and height are equal.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Orientation of a part on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Nominal width along the x-axis.
    #[default]
    Unrotated,
    /// Turned by 90 degrees: nominal width along the y-axis.
    Rotated,
}

impl Orientation {
    /// Both orientations, in the order they are tried.
    pub const ALL: [Orientation; 2] = [Orientation::Unrotated, Orientation::Rotated];

    /// Returns the footprint of `size` in this orientation.
    pub fn apply(&self, size: Size) -> Size {
        match self {
            Self::Unrotated => size,
            Self::Rotated => size.rotated(),
        }
    }

    pub fn is_rotated(&self) -> bool {
        matches!(self, Self::Rotated)
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at `(x, y)` with the given size.
    pub fn from_size(x: f64, y: f64, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Returns the x coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if a footprint of `size` fits inside this rectangle.
    pub fn fits(&self, size: Size) -> bool {
        self.width >= size.width && self.height >= size.height
    }

    /// Returns true if `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true if either side is below `min_size` or has no extent.
    pub fn is_degenerate(&self, min_size: f64) -> bool {
        self.width < min_size
            || self.height < min_size
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Returns the rectangle shrunk by `amount` on every side.
    ///
    /// Returns `None` when nothing would remain.
    pub fn shrink(&self, amount: f64) -> Option<Rect> {
        let width = self.width - 2.0 * amount;
        let height = self.height - 2.0 * amount;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Rect::new(self.x + amount, self.y + amount, width, height))
    }

    /// Returns the rectangle multiplied by `scale`, for display.
    pub fn scaled(&self, scale: f64) -> Rect {
        Rect::new(
            self.x * scale,
            self.y * scale,
            self.width * scale,
            self.height * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_size_rotated() {
        let size = Size::new(180.0, 40.0);
        let rotated = size.rotated();
        assert_eq!(rotated.width, 40.0);
        assert_eq!(rotated.height, 180.0);
        assert_relative_eq!(size.area(), rotated.area());
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(1.0, 1.0).is_valid());
        assert!(!Size::new(0.0, 1.0).is_valid());
        assert!(!Size::new(10.0, -2.0).is_valid());
        assert!(!Size::new(f64::NAN, 5.0).is_valid());
        assert!(!Size::new(f64::INFINITY, 5.0).is_valid());
    }

    #[test]
    fn test_orientation_apply() {
        let size = Size::new(600.0, 400.0);
        assert_eq!(Orientation::Unrotated.apply(size), size);
        assert_eq!(Orientation::Rotated.apply(size), Size::new(400.0, 600.0));
        assert!(Orientation::Rotated.is_rotated());
        assert!(!Orientation::default().is_rotated());
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.area(), 1200.0);
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains(&Rect::new(90.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains(&Rect::new(-1.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Shared edge only
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Shared corner only
        assert!(!a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_fits() {
        let free = Rect::new(0.0, 0.0, 50.0, 200.0);
        assert!(!free.fits(Size::new(180.0, 40.0)));
        assert!(free.fits(Size::new(40.0, 180.0)));
        assert!(free.fits(Size::new(50.0, 200.0)));
    }

    #[test]
    fn test_rect_shrink() {
        let sheet = Rect::new(0.0, 0.0, 1000.0, 500.0);
        let usable = sheet.shrink(10.0).unwrap();
        assert_eq!(usable, Rect::new(10.0, 10.0, 980.0, 480.0));
        assert!(sheet.shrink(250.0).is_none());
    }

    #[test]
    fn test_rect_degenerate() {
        assert!(Rect::new(0.0, 0.0, 0.5, 100.0).is_degenerate(1.0));
        assert!(Rect::new(0.0, 0.0, 100.0, 0.99).is_degenerate(1.0));
        assert!(!Rect::new(0.0, 0.0, 100.0, 1.0).is_degenerate(1.0));
        assert!(!Rect::new(0.0, 0.0, 1.5, 1.5).is_degenerate(1.0));
        // Zero extent is degenerate whatever the threshold.
        assert!(Rect::new(0.0, 0.0, 0.0, 100.0).is_degenerate(0.0));
        assert!(!Rect::new(0.0, 0.0, 0.5, 100.0).is_degenerate(0.0));
    }

    #[test]
    fn test_rect_scaled() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0).scaled(0.5);
        assert_relative_eq!(r.x, 5.0);
        assert_relative_eq!(r.width, 50.0);
        assert_relative_eq!(r.height, 25.0);
    }
}
