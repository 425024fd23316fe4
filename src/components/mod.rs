pub mod coefficients;
pub mod forces;

pub use coefficients::{AeroCoefficients, CoefficientRecord, WindAxisForces};
pub use forces::{quarter_chord_point, ForceMomentSample};
