use std::io;
use thiserror::Error;

use crate::host::ZoneId;

#[derive(Error, Debug)]
pub enum AeroError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("zone id {0} not found, check surface_zone_id in the case config")]
    SurfaceNotFound(ZoneId),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
