//! The seam between this crate and the CFD solver that loads it.
//!
//! Everything solver-owned (mesh threads, face loops, the surface force
//! integration) is reached through [`SolverHost`].

mod traits;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use traits::SolverHost;

/// Identifier of a boundary face zone in the solver mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u32);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ZoneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
