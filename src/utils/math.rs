use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Freestream velocity for an angle of attack measured in the X-Y plane.
///
/// # Arguments
/// * `speed` - Freestream speed (m/s).
/// * `alpha` - Angle of attack in radians.
pub fn freestream_velocity(speed: f64, alpha: f64) -> Vector3<f64> {
    Vector3::new(speed * alpha.cos(), speed * alpha.sin(), 0.0)
}

/// Dynamic pressure `0.5 * rho * v^2` (Pa).
#[inline]
pub fn dynamic_pressure(density: f64, speed: f64) -> f64 {
    0.5 * density * speed * speed
}
