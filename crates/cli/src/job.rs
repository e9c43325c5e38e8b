//! Job files: a sheet, its parts and optional engine settings.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use slabcut_core::{LayoutConfig, Part, Sheet};
use slabcut_cutting::{CutDirection, CuttingConfig};

/// A layout job as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub sheet: Sheet,
    pub parts: Vec<Part>,
    #[serde(default)]
    pub config: LayoutConfig,
    #[serde(default)]
    pub cutting: CuttingConfig,
}

impl Job {
    /// Parses a job from a JSON string.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let job: Job = serde_json::from_str(text).context("malformed job JSON")?;
        Ok(job)
    }

    /// Reads a job file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in job file {}", path.display()))
    }

    /// Applies command-line overrides on top of the job's cutting settings.
    ///
    /// Each override replaces only its own field.
    pub fn override_cutting(&mut self, depth: Option<f64>, pass_depth: Option<f64>, cw: bool) {
        if let Some(depth) = depth {
            self.cutting.cut_depth = depth;
        }
        if let Some(pass) = pass_depth {
            self.cutting.pass_depth = pass;
        }
        if cw {
            self.cutting.direction = CutDirection::Cw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slabcut_core::RotationConstraint;

    #[test]
    fn test_minimal_job() {
        let job = Job::from_json(
            r#"{
                "sheet": { "width": 2440, "height": 1220 },
                "parts": [ { "id": "a", "width": 600, "height": 400 } ]
            }"#,
        )
        .unwrap();

        assert_eq!(job.sheet.margin, 0.0);
        assert_eq!(job.sheet.kerf, 0.0);
        assert_eq!(job.parts.len(), 1);
        assert_eq!(job.parts[0].rotation, RotationConstraint::Free);
        assert_eq!(job.config, LayoutConfig::default());
    }

    #[test]
    fn test_job_with_config() {
        let job = Job::from_json(
            r#"{
                "sheet": { "width": 1000, "height": 1000, "margin": 10, "kerf": 3 },
                "parts": [
                    { "id": "door", "name": "Door", "width": 700, "height": 400, "rotation": "fixed" }
                ],
                "config": { "allow_rotation": false },
                "cutting": { "cut_depth": 18, "pass_depth": 6 }
            }"#,
        )
        .unwrap();

        assert_eq!(job.parts[0].rotation, RotationConstraint::Fixed);
        assert!(!job.config.allow_rotation);
        assert_eq!(job.config.min_usable_size, 1.0);
        assert_eq!(job.cutting.passes(), 3);
    }

    #[test]
    fn test_depth_override_keeps_pass_depth() {
        let mut job = Job::from_json(
            r#"{
                "sheet": { "width": 1000, "height": 1000 },
                "parts": [],
                "cutting": { "cut_depth": 19, "pass_depth": 6.5 }
            }"#,
        )
        .unwrap();

        job.override_cutting(Some(18.0), None, false);
        assert_eq!(job.cutting.cut_depth, 18.0);
        assert_eq!(job.cutting.pass_depth, 6.5);
        assert_eq!(job.cutting.passes(), 3);
        assert_eq!(job.cutting.direction, CutDirection::Ccw);

        job.override_cutting(None, Some(9.0), true);
        assert_eq!(job.cutting.cut_depth, 18.0);
        assert_eq!(job.cutting.passes(), 2);
        assert_eq!(job.cutting.direction, CutDirection::Cw);
    }

    #[test]
    fn test_malformed_job() {
        assert!(Job::from_json(r#"{ "sheet": { "width": 10 } }"#).is_err());
    }
}
