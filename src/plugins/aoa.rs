use tracing::{info, warn};

use crate::components::CoefficientRecord;
use crate::host::SolverHost;
use crate::resources::{AngleOfAttackState, CaseConfig};
use crate::systems::{
    evaluate_surface, fill_profile, inlet_velocity, AngleRefresh, AngleSource, ResultsLog,
    VelocityComponent,
};
use crate::utils::AeroError;

/// State the solver callbacks share for one case.
///
/// The harness owns one `AoaPlugin` per loaded case and routes the solver's
/// profile and on-demand hooks to it. All callbacks take `&mut self`, so calls
/// are serialised by construction. Not `Clone`, since it owns the results log.
///
/// ```compile_fail
/// let plugin = aoa_post::AoaPlugin::default();
/// let copy = plugin.clone();
/// ```
#[derive(Debug)]
pub struct AoaPlugin {
    config: CaseConfig,
    angle: AngleOfAttackState,
    angle_source: AngleSource,
    results: ResultsLog,
}

impl AoaPlugin {
    pub fn new(config: CaseConfig) -> Self {
        let angle_source = AngleSource::new(config.io.angle_file.clone());
        let results = ResultsLog::new(config.io.results_file.clone());
        Self {
            config,
            angle: AngleOfAttackState::default(),
            angle_source,
            results,
        }
    }

    pub fn config(&self) -> &CaseConfig {
        &self.config
    }

    pub fn angle(&self) -> &AngleOfAttackState {
        &self.angle
    }

    pub fn results_log(&self) -> &ResultsLog {
        &self.results
    }

    /// Re-reads the angle source; keeps the last angle if nothing usable is there.
    pub fn refresh_angle(&mut self) -> AngleRefresh {
        self.angle_source.refresh(&mut self.angle)
    }

    /// Inlet X velocity profile. Fills `faces` and returns the value used.
    pub fn inlet_u_profile(&mut self, faces: &mut [f64]) -> f64 {
        self.inlet_profile(VelocityComponent::AlongFlow, faces)
    }

    /// Inlet Y velocity profile. Fills `faces` and returns the value used.
    pub fn inlet_v_profile(&mut self, faces: &mut [f64]) -> f64 {
        self.inlet_profile(VelocityComponent::CrossFlow, faces)
    }

    fn inlet_profile(&mut self, component: VelocityComponent, faces: &mut [f64]) -> f64 {
        self.refresh_angle();
        let speed = self.config.freestream.speed;
        let value = inlet_velocity(component, speed, self.angle.degrees());
        fill_profile(faces, value);
        value
    }

    /// On-demand post-processing: forces on the configured surface, wind-axis
    /// decomposition, coefficients, one row in the results log.
    ///
    /// An unknown surface zone aborts before anything is written. A results log
    /// that cannot be opened is logged and skipped; the record is still returned.
    pub fn compute_forces_and_write<H: SolverHost>(
        &mut self,
        host: &H,
    ) -> Result<CoefficientRecord, AeroError> {
        self.refresh_angle();
        let record = evaluate_surface(host, &self.config, self.angle.degrees())?;

        if let Err(e) = self.results.append(&record) {
            warn!("could not write {}: {}", self.results.path().display(), e);
        }

        info!("{}", record);
        Ok(record)
    }

    /// Host-facing wrapper around [`AoaPlugin::compute_forces_and_write`] that
    /// never propagates an error back into the solver.
    pub fn on_demand<H: SolverHost>(&mut self, host: &H) -> Option<CoefficientRecord> {
        match self.compute_forces_and_write(host) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("post-processing skipped: {}", e);
                None
            }
        }
    }
}

impl Default for AoaPlugin {
    fn default() -> Self {
        Self::new(CaseConfig::default())
    }
}
