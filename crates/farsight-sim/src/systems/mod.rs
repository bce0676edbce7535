//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over the world. The spatial grid is the
//! only one that keeps state between ticks, and it is rebuilt every tick.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod spatial;
