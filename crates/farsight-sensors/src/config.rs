//! Sensor tuning, with defaults taken from the shared constants.

use serde::{Deserialize, Serialize};

use farsight_core::constants::{RADAR_RANGE, TRAIL_MAX_POINTS, TRAIL_UPDATE_INTERVAL};

/// Configuration for one [`Sensors`](crate::Sensors) instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorsConfig {
    /// Radius of the spatial query around the owner (meters).
    pub radar_range: f64,
    pub trail: TrailConfig,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            radar_range: RADAR_RANGE,
            trail: TrailConfig::default(),
        }
    }
}

/// Sampling parameters for [`HudTrail`](crate::HudTrail).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Seconds of accumulated time between samples.
    pub update_interval: f64,
    /// Samples kept; the oldest is evicted first.
    pub max_points: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            update_interval: TRAIL_UPDATE_INTERVAL,
            max_points: TRAIL_MAX_POINTS,
        }
    }
}
