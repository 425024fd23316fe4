mod builder;
mod case;

pub use builder::CaseConfigBuilder;
pub use case::{CaseConfig, FreestreamConfig, IoConfig, ReferenceGeometry};
