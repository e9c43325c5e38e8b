//! Configuration for machine-program output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use slabcut_core::{Error, Result};

/// Parameters for turning a layout into a machine program.
///
/// Distances are millimeters, rates are millimeters per minute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CuttingConfig {
    /// Program name written into the header comment.
    pub program_name: String,

    /// Retract height above the sheet surface.
    pub safe_z: f64,

    /// Total depth to cut, usually material thickness plus breakthrough.
    pub cut_depth: f64,

    /// Maximum depth removed per pass.
    pub pass_depth: f64,

    /// Cutting feed rate.
    pub feed_rate: f64,

    /// Plunge feed rate.
    pub plunge_rate: f64,

    /// Rapid traverse rate. Used only for time estimation.
    pub rapid_rate: f64,

    /// Direction to travel around each part.
    pub direction: CutDirection,

    /// Start/end position of the head in machine coordinates.
    pub home_position: (f64, f64),

    /// Digits after the decimal point in emitted coordinates.
    pub decimals: usize,
}

/// Travel direction around a part contour, seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CutDirection {
    /// Counter-clockwise (conventional for exterior contours).
    #[default]
    Ccw,
    /// Clockwise.
    Cw,
}

impl Default for CuttingConfig {
    fn default() -> Self {
        Self {
            program_name: "slabcut".to_string(),
            safe_z: 5.0,
            cut_depth: 19.0,
            pass_depth: 19.0,
            feed_rate: 3000.0,
            plunge_rate: 600.0,
            rapid_rate: 15000.0,
            direction: CutDirection::Ccw,
            home_position: (0.0, 0.0),
            decimals: 3,
        }
    }
}

impl CuttingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the program name.
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    /// Sets the retract height.
    pub fn with_safe_z(mut self, z: f64) -> Self {
        self.safe_z = z;
        self
    }

    /// Sets the total cut depth and a single pass of the same depth.
    pub fn with_cut_depth(mut self, depth: f64) -> Self {
        self.cut_depth = depth;
        self.pass_depth = depth;
        self
    }

    /// Sets the maximum depth per pass.
    pub fn with_pass_depth(mut self, depth: f64) -> Self {
        self.pass_depth = depth;
        self
    }

    /// Sets cutting and plunge feed rates.
    pub fn with_feed_rates(mut self, feed: f64, plunge: f64) -> Self {
        self.feed_rate = feed;
        self.plunge_rate = plunge;
        self
    }

    /// Sets the contour direction.
    pub fn with_direction(mut self, direction: CutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the home position.
    pub fn with_home_position(mut self, x: f64, y: f64) -> Self {
        self.home_position = (x, y);
        self
    }

    /// Number of passes needed to reach `cut_depth`.
    pub fn passes(&self) -> usize {
        (self.cut_depth / self.pass_depth).ceil().max(1.0) as usize
    }

    /// Depth of the given 1-based pass, never exceeding `cut_depth`.
    pub fn pass_z(&self, pass: usize) -> f64 {
        (pass as f64 * self.pass_depth).min(self.cut_depth)
    }

    /// Checks that all values are usable.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("safe_z", self.safe_z),
            ("cut_depth", self.cut_depth),
            ("pass_depth", self.pass_depth),
            ("feed_rate", self.feed_rate),
            ("plunge_rate", self.plunge_rate),
            ("rapid_rate", self.rapid_rate),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CuttingConfig::default();
        assert_eq!(config.safe_z, 5.0);
        assert_eq!(config.passes(), 1);
        assert_eq!(config.direction, CutDirection::Ccw);
        assert_eq!(config.home_position, (0.0, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = CuttingConfig::new()
            .with_program_name("job-42")
            .with_cut_depth(18.5)
            .with_pass_depth(6.0)
            .with_feed_rates(4000.0, 800.0)
            .with_home_position(10.0, 10.0);

        assert_eq!(config.program_name, "job-42");
        assert_eq!(config.cut_depth, 18.5);
        assert_eq!(config.feed_rate, 4000.0);
        assert_eq!(config.home_position, (10.0, 10.0));
    }

    #[test]
    fn test_passes() {
        let config = CuttingConfig::new().with_cut_depth(18.5).with_pass_depth(6.0);
        assert_eq!(config.passes(), 4);
        assert_eq!(config.pass_z(1), 6.0);
        assert_eq!(config.pass_z(3), 18.0);
        assert_eq!(config.pass_z(4), 18.5);
    }

    #[test]
    fn test_invalid_values() {
        assert!(CuttingConfig::new().with_pass_depth(0.0).validate().is_err());
        assert!(CuttingConfig::new()
            .with_feed_rates(-1.0, 100.0)
            .validate()
            .is_err());
    }
}
