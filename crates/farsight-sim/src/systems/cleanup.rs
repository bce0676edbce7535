//! Cleanup system: removes bodies that have died.
//!
//! Runs after the sensors have swept, so no contact refers to a body
//! that disappears here.

use hecs::{Entity, World};

use farsight_core::components::{Dead, Relations};

/// Despawn every body marked [`Dead`], except `keep`, and drop every
/// relation held toward it.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, keep: Entity) {
    despawn_buffer.clear();

    for (entity, _dead) in world.query_mut::<&Dead>() {
        if entity != keep {
            despawn_buffer.push(entity);
        }
    }

    if despawn_buffer.is_empty() {
        return;
    }
    for (_entity, relations) in world.query_mut::<&mut Relations>() {
        for &dead in despawn_buffer.iter() {
            relations.forget(dead);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
