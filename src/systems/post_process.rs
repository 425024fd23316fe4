use tracing::{debug, error};

use crate::components::CoefficientRecord;
use crate::host::SolverHost;
use crate::resources::CaseConfig;
use crate::systems::aerodynamics::calculate_record;
use crate::utils::AeroError;

/// Resolves the configured surface, asks the host for its force and moment about
/// the quarter-chord point and turns them into coefficients.
///
/// Fails only when the surface zone cannot be resolved; nothing is written here.
pub fn evaluate_surface<H: SolverHost>(
    host: &H,
    config: &CaseConfig,
    aoa_deg: f64,
) -> Result<CoefficientRecord, AeroError> {
    let zone = config.surface_zone_id;
    let surface = host.lookup_surface(zone).ok_or_else(|| {
        error!("zone id {} not found, check surface_zone_id", zone);
        AeroError::SurfaceNotFound(zone)
    })?;

    let reference_point = config.reference_point();
    let sample = host.compute_force_and_moment(&surface, &reference_point);
    debug!(
        "zone {}: force {:?}, moment {:?} about {:?}",
        zone, sample.force, sample.moment, reference_point
    );

    Ok(calculate_record(config, aoa_deg, sample))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ForceMomentSample;
    use crate::host::ZoneId;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};
    use std::cell::RefCell;

    struct SingleZoneHost {
        zone: ZoneId,
        sample: ForceMomentSample,
        reference_points: RefCell<Vec<Point3<f64>>>,
    }

    impl SolverHost for SingleZoneHost {
        type Surface = ZoneId;

        fn lookup_surface(&self, zone: ZoneId) -> Option<ZoneId> {
            (zone == self.zone).then_some(zone)
        }

        fn compute_force_and_moment(
            &self,
            _surface: &ZoneId,
            reference_point: &Point3<f64>,
        ) -> ForceMomentSample {
            self.reference_points.borrow_mut().push(*reference_point);
            self.sample
        }
    }

    fn host(zone: u32) -> SingleZoneHost {
        SingleZoneHost {
            zone: ZoneId(zone),
            sample: ForceMomentSample::from_force(Vector3::new(-2.0, 0.5, 0.0)),
            reference_points: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_moments_taken_about_quarter_chord() {
        let host = host(5);
        let config = CaseConfig::default();

        evaluate_surface(&host, &config, 0.0).unwrap();

        let points = host.reference_points.borrow();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 0.25 * 0.435);
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[0].z, 0.0);
    }

    #[test]
    fn test_unknown_zone_is_reported() {
        let host = host(3);
        let config = CaseConfig::default();

        let err = evaluate_surface(&host, &config, 0.0).unwrap_err();

        assert!(matches!(err, AeroError::SurfaceNotFound(ZoneId(5))));
        assert!(host.reference_points.borrow().is_empty());
    }

    #[test]
    fn test_record_carries_angle() {
        let host = host(5);
        let config = CaseConfig::default();
        let record = evaluate_surface(&host, &config, 10.0).unwrap();
        assert_eq!(record.aoa_deg, 10.0);
        assert_relative_eq!(record.coefficients.c_d, -0.0300, epsilon = 1e-4);
    }
}
