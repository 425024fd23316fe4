use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::quarter_chord_point;
use crate::host::ZoneId;
use crate::resources::config::CaseConfigBuilder;
use crate::utils::{
    dynamic_pressure, AeroError, DEFAULT_ANGLE_FILE, DEFAULT_DENSITY, DEFAULT_FREESTREAM_SPEED,
    DEFAULT_REFERENCE_AREA, DEFAULT_REFERENCE_LENGTH, DEFAULT_RESULTS_FILE,
    DEFAULT_SURFACE_ZONE_ID,
};

/// Freestream conditions imposed at the inlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreestreamConfig {
    /// Freestream speed (m/s).
    pub speed: f64,
    /// Fluid density (kg/m³).
    pub density: f64,
}

impl Default for FreestreamConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_FREESTREAM_SPEED,
            density: DEFAULT_DENSITY,
        }
    }
}

/// Normalisation constants for the coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceGeometry {
    /// Reference area (m²).
    pub area: f64,
    /// Reference length, the chord (m).
    pub length: f64,
}

impl ReferenceGeometry {
    /// Creates a new `ReferenceGeometry`.
    ///
    /// # Arguments
    /// * `area` - Reference area (m²).
    /// * `length` - Reference length (m).
    pub fn new(area: f64, length: f64) -> Self {
        Self { area, length }
    }
}

impl Default for ReferenceGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_AREA, DEFAULT_REFERENCE_LENGTH)
    }
}

/// Files the plugin reads and writes, relative to the solver working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoConfig {
    pub angle_file: PathBuf,
    pub results_file: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            angle_file: PathBuf::from(DEFAULT_ANGLE_FILE),
            results_file: PathBuf::from(DEFAULT_RESULTS_FILE),
        }
    }
}

/// Everything fixed for the lifetime of a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Face zone of the airfoil/wing surface.
    pub surface_zone_id: ZoneId,
    #[serde(default)]
    pub freestream: FreestreamConfig,
    #[serde(default)]
    pub reference: ReferenceGeometry,
    #[serde(default)]
    pub io: IoConfig,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            surface_zone_id: ZoneId(DEFAULT_SURFACE_ZONE_ID),
            freestream: FreestreamConfig::default(),
            reference: ReferenceGeometry::default(),
            io: IoConfig::default(),
        }
    }
}

impl CaseConfig {
    pub fn builder() -> CaseConfigBuilder {
        CaseConfigBuilder::new()
    }

    /// Loads a case from a YAML file. Missing sections take their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, AeroError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, AeroError> {
        let config: CaseConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Freestream dynamic pressure `q = 0.5 * rho * U^2` (Pa).
    pub fn dynamic_pressure(&self) -> f64 {
        dynamic_pressure(self.freestream.density, self.freestream.speed)
    }

    /// Point moments are taken about.
    pub fn reference_point(&self) -> Point3<f64> {
        quarter_chord_point(self.reference.length)
    }

    pub fn validate(&self) -> Result<(), AeroError> {
        let scalars = [
            ("freestream.speed", self.freestream.speed),
            ("freestream.density", self.freestream.density),
            ("reference.area", self.reference.area),
            ("reference.length", self.reference.length),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(AeroError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.io.angle_file.as_os_str().is_empty() {
            return Err(AeroError::InvalidConfig("io.angle_file is empty".into()));
        }
        if self.io.results_file.as_os_str().is_empty() {
            return Err(AeroError::InvalidConfig("io.results_file is empty".into()));
        }

        Ok(())
    }
}
