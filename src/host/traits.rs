use nalgebra::Point3;

use crate::components::ForceMomentSample;
use crate::host::ZoneId;

/// Capabilities the post-processor needs from the solver.
pub trait SolverHost {
    /// Handle to a resolved surface (a face thread in the solver's terms).
    type Surface;

    /// Resolves a face zone id to a surface handle, `None` if the zone does not exist.
    fn lookup_surface(&self, zone: ZoneId) -> Option<Self::Surface>;

    /// Integrates pressure and viscous forces over `surface`, with moments taken
    /// about `reference_point`.
    fn compute_force_and_moment(
        &self,
        surface: &Self::Surface,
        reference_point: &Point3<f64>,
    ) -> ForceMomentSample;
}
