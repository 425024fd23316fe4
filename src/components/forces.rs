use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::QUARTER_CHORD;

/// Surface force and moment integrals returned by the solver for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceMomentSample {
    /// Net force (N) in solver axes.
    pub force: Vector3<f64>,
    /// Net moment (N·m) about the reference point.
    pub moment: Vector3<f64>,
}

impl ForceMomentSample {
    pub fn new(force: Vector3<f64>, moment: Vector3<f64>) -> Self {
        Self { force, moment }
    }

    /// A sample carrying a force only, no moment.
    pub fn from_force(force: Vector3<f64>) -> Self {
        Self::new(force, Vector3::zeros())
    }
}

impl Default for ForceMomentSample {
    fn default() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }
}

/// Moment reference point for a surface of chord `reference_length`:
/// quarter-chord, mid-span, zero height.
pub fn quarter_chord_point(reference_length: f64) -> Point3<f64> {
    Point3::new(QUARTER_CHORD * reference_length, 0.0, 0.0)
}
