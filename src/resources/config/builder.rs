use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::host::ZoneId;
use crate::resources::config::CaseConfig;
use crate::utils::AeroError;

#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct CaseConfigBuilder {
    pub surface_zone_id: Option<ZoneId>,
    pub speed: Option<f64>,
    pub density: Option<f64>,
    pub reference_area: Option<f64>,
    pub reference_length: Option<f64>,
    pub angle_file: Option<PathBuf>,
    pub results_file: Option<PathBuf>,
}

impl CaseConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface_zone_id(mut self, zone: u32) -> Self {
        self.surface_zone_id = Some(ZoneId(zone));
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn reference_area(mut self, area: f64) -> Self {
        self.reference_area = Some(area);
        self
    }

    pub fn reference_length(mut self, length: f64) -> Self {
        self.reference_length = Some(length);
        self
    }

    pub fn angle_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.angle_file = Some(path.into());
        self
    }

    pub fn results_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_file = Some(path.into());
        self
    }

    /// Reads a flat JSON object. Unknown keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, AeroError> {
        let mut builder = Self::new();

        if let Some(zone) = value.get("surface_zone_id") {
            let zone = zone
                .as_u64()
                .and_then(|z| u32::try_from(z).ok())
                .ok_or_else(|| {
                    AeroError::InvalidConfig(format!("invalid surface_zone_id: {}", zone))
                })?;
            builder = builder.surface_zone_id(zone);
        }

        if let Some(speed) = value.get("speed").and_then(|v| v.as_f64()) {
            builder = builder.speed(speed);
        }

        if let Some(density) = value.get("density").and_then(|v| v.as_f64()) {
            builder = builder.density(density);
        }

        if let Some(area) = value.get("reference_area").and_then(|v| v.as_f64()) {
            builder = builder.reference_area(area);
        }

        if let Some(length) = value.get("reference_length").and_then(|v| v.as_f64()) {
            builder = builder.reference_length(length);
        }

        if let Some(path) = value.get("angle_file").and_then(|v| v.as_str()) {
            builder = builder.angle_file(path);
        }

        if let Some(path) = value.get("results_file").and_then(|v| v.as_str()) {
            builder = builder.results_file(path);
        }

        Ok(builder)
    }

    pub fn from_json_str(json: &str) -> Result<Self, AeroError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    pub fn build(self) -> Result<CaseConfig, AeroError> {
        let mut config = CaseConfig::default();

        if let Some(zone) = self.surface_zone_id {
            config.surface_zone_id = zone;
        }
        if let Some(speed) = self.speed {
            config.freestream.speed = speed;
        }
        if let Some(density) = self.density {
            config.freestream.density = density;
        }
        if let Some(area) = self.reference_area {
            config.reference.area = area;
        }
        if let Some(length) = self.reference_length {
            config.reference.length = length;
        }
        if let Some(path) = self.angle_file {
            config.io.angle_file = path;
        }
        if let Some(path) = self.results_file {
            config.io.results_file = path;
        }

        config.validate()?;
        Ok(config)
    }
}
