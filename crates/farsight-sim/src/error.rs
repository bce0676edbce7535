use thiserror::Error;

/// Reasons a [`SimConfig`](crate::SimConfig) is refused.
#[derive(Debug, Error)]
pub enum SimConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid cell size must be positive and finite, got {0}")]
    GridCellSize(f64),
    #[error("radar range must be non-negative and finite, got {0}")]
    RadarRange(f64),
}
