use nalgebra::Vector3;

use crate::components::{AeroCoefficients, CoefficientRecord, ForceMomentSample, WindAxisForces};
use crate::resources::CaseConfig;
use crate::utils::deg_to_rad;

// --- Pure Calculation Logic ---

/// Rotates a solver-axes force into wind axes for an angle of attack in the X-Y plane.
///
/// `drag = Fx cos(a) + Fy sin(a)`, `lift = -Fx sin(a) + Fy cos(a)`. Fz is not used.
pub fn rotate_to_wind_axes(force: &Vector3<f64>, alpha: f64) -> WindAxisForces {
    let (sin_a, cos_a) = alpha.sin_cos();
    WindAxisForces {
        drag: force.x * cos_a + force.y * sin_a,
        lift: -force.x * sin_a + force.y * cos_a,
    }
}

/// Non-dimensionalises wind-axis forces and moments.
///
/// # Arguments
/// * `wind` - Drag and lift (N).
/// * `moment` - Moment about the reference point (N·m).
/// * `dynamic_pressure` - Freestream dynamic pressure (Pa).
/// * `area` - Reference area (m²).
/// * `length` - Reference length (m).
///
/// # Returns
/// All-zero coefficients when `dynamic_pressure * area` is zero. Moment
/// coefficients are also zero when the reference length is zero.
pub fn calculate_coefficients(
    wind: &WindAxisForces,
    moment: &Vector3<f64>,
    dynamic_pressure: f64,
    area: f64,
    length: f64,
) -> AeroCoefficients {
    let force_scale = dynamic_pressure * area;
    if force_scale == 0.0 {
        return AeroCoefficients::zero();
    }

    let moment_scale = force_scale * length;
    let c_m = if moment_scale == 0.0 {
        Vector3::zeros()
    } else {
        moment / moment_scale
    };

    AeroCoefficients {
        c_d: wind.drag / force_scale,
        c_l: wind.lift / force_scale,
        c_m,
    }
}

/// Builds the full results record for one force/moment sample.
pub fn calculate_record(
    config: &CaseConfig,
    aoa_deg: f64,
    sample: ForceMomentSample,
) -> CoefficientRecord {
    let wind = rotate_to_wind_axes(&sample.force, deg_to_rad(aoa_deg));
    let coefficients = calculate_coefficients(
        &wind,
        &sample.moment,
        config.dynamic_pressure(),
        config.reference.area,
        config.reference.length,
    );

    CoefficientRecord {
        aoa_deg,
        sample,
        wind,
        coefficients,
    }
}
