//! Simulation engine for Farsight.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, feeds the
//! player's sensors, and produces `SensorSnapshot`s for the HUD.

pub mod engine;
pub mod error;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::SimConfigError;
pub use farsight_core as core;
pub use farsight_sensors as sensors;
