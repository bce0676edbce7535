//! Spatial queries over the world, and the body properties sensors read.
//!
//! Bodies are entities carrying a [`BodyKind`]. Sensors only hold entity
//! handles and look everything else up here, so a handle whose entity
//! has been despawned simply reads as "no such property".

use hecs::{Entity, World};

use farsight_core::components::{Dead, Frame, Position};
use farsight_core::enums::{BodyKind, FlightState};
use farsight_core::types::FrameId;

/// The world as seen by a sensor sweep.
pub trait Space {
    fn world(&self) -> &World;

    /// Bodies that may lie within `radius` of `centre`.
    ///
    /// Must include every body that does; may include some that don't.
    fn bodies_maybe_near(&self, centre: Entity, radius: f64) -> Vec<Entity>;

    /// Every body in the world.
    fn bodies(&self) -> Vec<Entity> {
        self.world()
            .query::<&BodyKind>()
            .iter()
            .map(|(entity, _)| entity)
            .collect()
    }
}

/// Exact range scan: no false positives.
impl Space for World {
    fn world(&self) -> &World {
        self
    }

    fn bodies_maybe_near(&self, centre: Entity, radius: f64) -> Vec<Entity> {
        let Some(origin) = position(self, centre) else {
            return Vec::new();
        };
        let radius_sq = radius * radius;
        self.query::<(&BodyKind, &Position)>()
            .iter()
            .filter(|(_, (_, pos))| pos.0.distance_squared(origin.0) <= radius_sq)
            .map(|(entity, _)| entity)
            .collect()
    }
}

pub fn body_kind(world: &World, body: Entity) -> Option<BodyKind> {
    world.get::<&BodyKind>(body).ok().map(|kind| *kind)
}

pub fn is_ship(world: &World, body: Entity) -> bool {
    body_kind(world, body).is_some_and(BodyKind::is_ship)
}

pub fn is_dead(world: &World, body: Entity) -> bool {
    world.get::<&Dead>(body).is_ok()
}

/// Flight state of a ship. Other bodies have none.
pub fn flight_state(world: &World, body: Entity) -> Option<FlightState> {
    if !is_ship(world, body) {
        return None;
    }
    world.get::<&FlightState>(body).ok().map(|state| *state)
}

pub fn position(world: &World, body: Entity) -> Option<Position> {
    world.get::<&Position>(body).ok().map(|pos| *pos)
}

pub fn frame(world: &World, body: Entity) -> Option<FrameId> {
    world.get::<&Frame>(body).ok().map(|frame| frame.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_range_scan() {
        let mut world = World::new();
        let centre = world.spawn((BodyKind::Ship, Position::new(0.0, 0.0, 0.0)));
        let near = world.spawn((BodyKind::Ship, Position::new(0.0, 99_000.0, 0.0)));
        let far = world.spawn((BodyKind::Ship, Position::new(0.0, 0.0, 101_000.0)));
        // Not a body: never reported.
        world.spawn((Position::new(1.0, 0.0, 0.0),));

        let found = world.bodies_maybe_near(centre, 100_000.0);
        assert!(found.contains(&centre));
        assert!(found.contains(&near));
        assert!(!found.contains(&far));
        assert_eq!(found.len(), 2);

        assert_eq!(world.bodies().len(), 3);
    }

    #[test]
    fn test_missing_centre_finds_nothing() {
        let mut world = World::new();
        let gone = world.spawn((BodyKind::Ship, Position::default()));
        world.spawn((BodyKind::Ship, Position::default()));
        world.despawn(gone).unwrap();
        assert!(world.bodies_maybe_near(gone, 1.0e9).is_empty());
    }

    #[test]
    fn test_flight_state_only_for_ships() {
        let mut world = World::new();
        let ship = world.spawn((BodyKind::Ship, FlightState::Docked));
        let missile = world.spawn((BodyKind::Missile, FlightState::Flying));
        assert_eq!(flight_state(&world, ship), Some(FlightState::Docked));
        assert_eq!(flight_state(&world, missile), None);
    }
}
