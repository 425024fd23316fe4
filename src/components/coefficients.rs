use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::ForceMomentSample;
use crate::utils::{format_general, RESULTS_HEADER, RESULTS_PRECISION};

/// Force resolved parallel (drag) and perpendicular (lift) to the freestream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindAxisForces {
    pub drag: f64,
    pub lift: f64,
}

/// Non-dimensional force and moment coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub c_d: f64,
    pub c_l: f64,
    /// Roll, pitch and yaw moment coefficients.
    pub c_m: Vector3<f64>,
}

impl AeroCoefficients {
    pub fn zero() -> Self {
        Self {
            c_d: 0.0,
            c_l: 0.0,
            c_m: Vector3::zeros(),
        }
    }
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::zero()
    }
}

/// One row of the results log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRecord {
    /// Angle of attack the sample was taken at (degrees).
    pub aoa_deg: f64,
    pub sample: ForceMomentSample,
    pub wind: WindAxisForces,
    pub coefficients: AeroCoefficients,
}

impl CoefficientRecord {
    /// Column names, tab separated.
    pub fn header() -> &'static str {
        RESULTS_HEADER
    }

    /// Values in log column order:
    /// AoA, Fx, Fy, Fz, Fd, Fl, Cd, Cl, Mx, My, Mz, Cmx, Cmy, Cmz.
    pub fn values(&self) -> [f64; 14] {
        let f = &self.sample.force;
        let m = &self.sample.moment;
        let c = &self.coefficients;
        [
            self.aoa_deg,
            f.x,
            f.y,
            f.z,
            self.wind.drag,
            self.wind.lift,
            c.c_d,
            c.c_l,
            m.x,
            m.y,
            m.z,
            c.c_m.x,
            c.c_m.y,
            c.c_m.z,
        ]
    }

    /// The record as a tab-separated line, without the trailing newline.
    pub fn to_row(&self) -> String {
        self.values()
            .iter()
            .map(|v| format_general(*v, RESULTS_PRECISION))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl fmt::Display for CoefficientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = |v: f64| format_general(v, RESULTS_PRECISION);
        let force = &self.sample.force;
        let moment = &self.sample.moment;
        let c = &self.coefficients;
        write!(
            f,
            "AoA {} deg: Fx={} Fy={} Fz={} Fd={} Fl={} Cd={} Cl={} | Mx={} My={} Mz={} Cmx={} Cmy={} Cmz={}",
            g(self.aoa_deg),
            g(force.x),
            g(force.y),
            g(force.z),
            g(self.wind.drag),
            g(self.wind.lift),
            g(c.c_d),
            g(c.c_l),
            g(moment.x),
            g(moment.y),
            g(moment.z),
            g(c.c_m.x),
            g(c.c_m.y),
            g(c.c_m.z),
        )
    }
}
