use crate::error::PositionError;
use crate::model::Coordinate;

/// Single-shot position capability provided by the host platform.
#[allow(async_fn_in_trait)]
pub trait PositionSensor {
    async fn current_position(&self) -> Result<Coordinate, PositionError>;
}

/// Sensor backed by a host-configured `"lat,lon"` position. Hosts that
/// configure nothing report `Unsupported`, like a platform without a
/// geolocation capability.
pub struct HostSensor {
    position: Option<String>,
}

impl HostSensor {
    pub fn new(position: Option<String>) -> Self {
        Self { position }
    }
}

impl PositionSensor for HostSensor {
    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        let Some(raw) = &self.position else {
            return Err(PositionError::Unsupported);
        };

        Coordinate::parse_loc(raw).ok_or(PositionError::Unavailable)
    }
}
