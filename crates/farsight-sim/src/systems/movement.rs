//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.

use hecs::World;

use farsight_core::components::{FlightState, Position, Velocity};

/// Integrate every body with a velocity. Ships only move while flying;
/// docked or landed ships stay put until launched again.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, state)) in
        world.query_mut::<(&mut Position, &Velocity, Option<&FlightState>)>()
    {
        if matches!(state, Some(state) if *state != FlightState::Flying) {
            continue;
        }
        pos.0 += vel.0 * dt;
    }
}
