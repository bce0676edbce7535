//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Sensors ---

/// Radius of the sensor sweep around the owner, shared with the radar HUD.
pub const RADAR_RANGE: f64 = 100_000.0;

/// Relation value meaning "sworn enemy".
pub const RELATIONS_HOSTILE: u8 = 0;

/// Relation value meaning "full ally".
pub const RELATIONS_ALLY: u8 = 100;

/// Relation value assumed when nothing else is known.
pub const RELATIONS_NEUTRAL: u8 = 50;

// --- Trails ---

/// Seconds of accumulated time between two trail samples.
pub const TRAIL_UPDATE_INTERVAL: f64 = 0.1;

/// Maximum number of samples kept per trail.
pub const TRAIL_MAX_POINTS: usize = 30;

// --- Spatial index ---

/// Edge length of one spatial grid cell (meters).
pub const GRID_CELL_SIZE: f64 = 50_000.0;

// --- World setup ---

/// Radius of the shell random traffic is spawned in (meters).
pub const TRAFFIC_SPAWN_RADIUS: f64 = 90_000.0;

/// Speed range of spawned traffic (m/s).
pub const TRAFFIC_MIN_SPEED: f64 = 50.0;
pub const TRAFFIC_MAX_SPEED: f64 = 400.0;
