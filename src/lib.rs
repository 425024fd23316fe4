//! Angle-of-attack driven inlet profiles and aerodynamic coefficient
//! post-processing for CFD solver plugins.
//!
//! A harness owns an [`AoaPlugin`] and forwards the solver's callbacks to it:
//! the two inlet velocity profiles and the on-demand force/coefficient pass.
//! Solver-owned data is reached through the [`SolverHost`] trait.

pub mod components;
pub mod host;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{AeroCoefficients, CoefficientRecord, ForceMomentSample, WindAxisForces};
pub use host::{SolverHost, ZoneId};
pub use plugins::AoaPlugin;
pub use resources::{AngleOfAttackState, CaseConfig, CaseConfigBuilder};
pub use systems::{AngleRefresh, AngleSource, ResultsLog};
pub use utils::AeroError;
