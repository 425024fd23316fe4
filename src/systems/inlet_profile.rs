use crate::utils::{deg_to_rad, freestream_velocity};

/// Which inlet velocity component a profile supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityComponent {
    /// X component, `U * cos(alpha)`.
    AlongFlow,
    /// Y component, `U * sin(alpha)`.
    CrossFlow,
}

/// Inlet velocity component for a freestream of `speed` at `aoa_deg` degrees.
pub fn inlet_velocity(component: VelocityComponent, speed: f64, aoa_deg: f64) -> f64 {
    let velocity = freestream_velocity(speed, deg_to_rad(aoa_deg));
    match component {
        VelocityComponent::AlongFlow => velocity.x,
        VelocityComponent::CrossFlow => velocity.y,
    }
}

/// The inlet is uniform: every face gets the same value.
pub fn fill_profile(faces: &mut [f64], value: f64) {
    faces.fill(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const UINF: f64 = 16.0;

    #[test]
    fn test_zero_angle() {
        let u = inlet_velocity(VelocityComponent::AlongFlow, UINF, 0.0);
        let v = inlet_velocity(VelocityComponent::CrossFlow, UINF, 0.0);
        assert_eq!(u, UINF);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_right_angle() {
        let u = inlet_velocity(VelocityComponent::AlongFlow, UINF, 90.0);
        let v = inlet_velocity(VelocityComponent::CrossFlow, UINF, 90.0);
        assert_relative_eq!(u, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v, UINF, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_trig_over_full_circle() {
        for tenth in 0..3600 {
            let deg = tenth as f64 / 10.0;
            let rad = deg * std::f64::consts::PI / 180.0;
            assert_relative_eq!(
                inlet_velocity(VelocityComponent::AlongFlow, UINF, deg),
                UINF * rad.cos(),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                inlet_velocity(VelocityComponent::CrossFlow, UINF, deg),
                UINF * rad.sin(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_fill_profile_is_uniform() {
        let mut faces = vec![f64::NAN; 17];
        fill_profile(&mut faces, 3.5);
        assert!(faces.iter().all(|&v| v == 3.5));

        let mut empty: Vec<f64> = Vec::new();
        fill_profile(&mut empty, 1.0);
        assert!(empty.is_empty());
    }
}
