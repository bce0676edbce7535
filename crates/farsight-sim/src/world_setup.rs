//! Body spawn factories for setting up the simulation world.
//!
//! Creates the player ship, NPC traffic, and the static bodies of a
//! star system with appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use farsight_core::components::*;
use farsight_core::constants::*;
use farsight_core::types::FrameId;

/// Relations a traffic ship may be given toward the player's side.
const TRAFFIC_RELATIONS: [u8; 5] = [
    RELATIONS_HOSTILE,
    25,
    RELATIONS_NEUTRAL,
    75,
    RELATIONS_ALLY,
];

/// Set up the player and the fixed bodies of the home system.
pub fn setup_system(world: &mut World) -> Entity {
    let player = spawn_player_ship(world);
    spawn_star(world, "Sol", Position::new(0.0, 0.0, -4.0e11));
    spawn_planet(world, "Earth", Position::new(0.0, 6.0e6, -6.4e6));
    spawn_station(world, "Orbital Station", Position::new(20_000.0, 0.0, 0.0));
    spawn_surface_structure(world, "Starport", Position::new(0.0, 6.0e6, 0.0));
    player
}

/// Spawn the player's own ship at the origin.
pub fn spawn_player_ship(world: &mut World) -> Entity {
    world.spawn((
        BodyKind::Ship,
        Label("Player".to_string()),
        Position::new(0.0, 0.0, 0.0),
        Velocity::default(),
        FlightState::Flying,
        Frame(FrameId::ROOT),
        Relations::default(),
        CombatTarget::default(),
    ))
}

/// Spawn a flying NPC ship in the root frame.
pub fn spawn_ship(world: &mut World, label: &str, position: Position, velocity: Velocity) -> Entity {
    world.spawn((
        BodyKind::Ship,
        Label(label.to_string()),
        position,
        velocity,
        FlightState::Flying,
        Frame(FrameId::ROOT),
        Relations::default(),
    ))
}

pub fn spawn_star(world: &mut World, label: &str, position: Position) -> Entity {
    spawn_landmark(world, BodyKind::Star, label, position)
}

pub fn spawn_planet(world: &mut World, label: &str, position: Position) -> Entity {
    spawn_landmark(world, BodyKind::Planet, label, position)
}

pub fn spawn_station(world: &mut World, label: &str, position: Position) -> Entity {
    spawn_landmark(world, BodyKind::SpaceStation, label, position)
}

pub fn spawn_surface_structure(world: &mut World, label: &str, position: Position) -> Entity {
    spawn_landmark(world, BodyKind::SurfaceStructure, label, position)
}

fn spawn_landmark(world: &mut World, kind: BodyKind, label: &str, position: Position) -> Entity {
    world.spawn((kind, Label(label.to_string()), position, Frame(FrameId::ROOT)))
}

/// Spawn a wave of NPC ships at random bearings within radar range of
/// the origin, each on a random heading. The player's relations toward
/// each one are drawn at random, so the wave mixes hostiles, neutrals
/// and allies.
pub fn spawn_traffic(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    count: usize,
) -> Vec<Entity> {
    let mut ships = Vec::with_capacity(count);
    for i in 0..count {
        let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let range: f64 = rng.gen_range(1_000.0..TRAFFIC_SPAWN_RADIUS);
        let altitude: f64 = rng.gen_range(-5_000.0..5_000.0);
        let position = Position::new(range * bearing.sin(), range * bearing.cos(), altitude);

        let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed: f64 = rng.gen_range(TRAFFIC_MIN_SPEED..TRAFFIC_MAX_SPEED);
        let velocity = Velocity::new(speed * heading.sin(), speed * heading.cos(), 0.0);

        let ship = spawn_ship(world, &format!("Trader {}", i + 1), position, velocity);
        let relation = TRAFFIC_RELATIONS[rng.gen_range(0..TRAFFIC_RELATIONS.len())];
        if let Ok(mut relations) = world.get::<&mut Relations>(player) {
            relations.set(ship, relation);
        }
        ships.push(ship);
    }
    ships
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_setup_system_has_one_ship_and_four_landmarks() {
        let mut world = World::new();
        let player = setup_system(&mut world);

        let kinds: Vec<BodyKind> = world.query::<&BodyKind>().iter().map(|(_, k)| *k).collect();
        assert_eq!(kinds.iter().filter(|k| k.is_ship()).count(), 1);
        assert_eq!(kinds.iter().filter(|k| k.is_landmark()).count(), 4);
        assert_eq!(*world.get::<&BodyKind>(player).unwrap(), BodyKind::Ship);
    }

    #[test]
    fn test_traffic_within_spawn_radius() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let player = spawn_player_ship(&mut world);
        let ships = spawn_traffic(&mut world, &mut rng, player, 25);
        assert_eq!(ships.len(), 25);

        let origin = Position::default();
        for ship in ships {
            let pos = *world.get::<&Position>(ship).unwrap();
            assert!(pos.range_to(&origin) < TRAFFIC_SPAWN_RADIUS + 5_000.0);
            let speed = world.get::<&Velocity>(ship).unwrap().speed();
            assert!(speed > TRAFFIC_MIN_SPEED - 1e-6 && speed < TRAFFIC_MAX_SPEED + 1e-6);
            let relation = world.get::<&Relations>(player).unwrap().get(ship);
            assert!(TRAFFIC_RELATIONS.contains(&relation));
        }
    }
}
