use serde::{Deserialize, Serialize};

/// Latest known angle of attack, shared by the inlet profiles and the post-processor.
///
/// Starts at 0 degrees and only changes when a refresh reads a valid value, so a
/// missing angle source leaves the last value in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleOfAttackState {
    degrees: f64,
}

impl AngleOfAttackState {
    pub fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        self.degrees = degrees;
    }
}
