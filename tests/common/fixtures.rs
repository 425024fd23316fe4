use aoa_post::{ForceMomentSample, SolverHost, ZoneId};
use nalgebra::{Point3, Vector3};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Solver double returning canned force/moment vectors per zone.
#[derive(Debug, Default)]
pub struct CannedHost {
    samples: HashMap<ZoneId, ForceMomentSample>,
    force_calls: Cell<usize>,
    reference_points: RefCell<Vec<Point3<f64>>>,
}

impl CannedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, zone: u32, sample: ForceMomentSample) -> Self {
        self.samples.insert(ZoneId(zone), sample);
        self
    }

    pub fn set_sample(&mut self, zone: u32, sample: ForceMomentSample) {
        self.samples.insert(ZoneId(zone), sample);
    }

    pub fn force_calls(&self) -> usize {
        self.force_calls.get()
    }

    pub fn reference_points(&self) -> Vec<Point3<f64>> {
        self.reference_points.borrow().clone()
    }
}

impl SolverHost for CannedHost {
    type Surface = ZoneId;

    fn lookup_surface(&self, zone: ZoneId) -> Option<ZoneId> {
        self.samples.contains_key(&zone).then_some(zone)
    }

    fn compute_force_and_moment(
        &self,
        surface: &ZoneId,
        reference_point: &Point3<f64>,
    ) -> ForceMomentSample {
        self.force_calls.set(self.force_calls.get() + 1);
        self.reference_points.borrow_mut().push(*reference_point);
        self.samples.get(surface).copied().unwrap_or_default()
    }
}

/// Force on the airfoil used for the worked 10 degree example.
pub fn reference_force() -> ForceMomentSample {
    ForceMomentSample::from_force(Vector3::new(-2.0, 0.5, 0.0))
}

/// A force with moments on all three axes.
pub fn loaded_wing() -> ForceMomentSample {
    let moment = Vector3::new(0.02, -0.3, 0.011);
    ForceMomentSample::new(Vector3::new(-1.2, 3.4, 0.05), moment)
}
