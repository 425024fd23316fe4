pub mod angle;
pub mod config;

pub use angle::AngleOfAttackState;
pub use config::{CaseConfig, CaseConfigBuilder, FreestreamConfig, IoConfig, ReferenceGeometry};
