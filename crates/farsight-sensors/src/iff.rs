//! Identification friend or foe.

use hecs::{Entity, World};

use farsight_core::components::Relations;
use farsight_core::constants::{RELATIONS_ALLY, RELATIONS_HOSTILE, RELATIONS_NEUTRAL};
use farsight_core::enums::Iff;

use crate::space;

/// How `owner` regards `other`, 0..=100.
pub fn relations_to(world: &World, owner: Entity, other: Entity) -> u8 {
    world
        .get::<&Relations>(owner)
        .map(|relations| relations.get(other))
        .unwrap_or(RELATIONS_NEUTRAL)
}

/// Classify `other` as seen from `owner`.
///
/// Only ships are classified. Only the two ends of the relation scale
/// map to hostile and ally; everything between is neutral.
pub fn classify(world: &World, owner: Entity, other: Entity) -> Iff {
    if !space::is_ship(world, other) {
        return Iff::Unknown;
    }
    match relations_to(world, owner, other) {
        RELATIONS_HOSTILE => Iff::Hostile,
        RELATIONS_ALLY => Iff::Ally,
        _ => Iff::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farsight_core::enums::BodyKind;

    fn setup(relation: u8) -> (World, Entity, Entity) {
        let mut world = World::new();
        let other = world.spawn((BodyKind::Ship,));
        let owner = world.spawn((BodyKind::Ship, Relations::default().with(other, relation)));
        (world, owner, other)
    }

    #[test]
    fn test_relation_endpoints() {
        let (world, owner, other) = setup(0);
        assert_eq!(classify(&world, owner, other), Iff::Hostile);

        let (world, owner, other) = setup(100);
        assert_eq!(classify(&world, owner, other), Iff::Ally);
    }

    #[test]
    fn test_mid_range_is_neutral() {
        for relation in [1, 25, 50, 75, 99] {
            let (world, owner, other) = setup(relation);
            assert_eq!(
                classify(&world, owner, other),
                Iff::Neutral,
                "relation {relation}"
            );
        }
    }

    #[test]
    fn test_non_ship_is_unknown() {
        let mut world = World::new();
        let station = world.spawn((BodyKind::SpaceStation,));
        let owner = world.spawn((BodyKind::Ship, Relations::default().with(station, 0)));
        assert_eq!(classify(&world, owner, station), Iff::Unknown);
    }

    #[test]
    fn test_owner_without_relations_sees_neutral() {
        let mut world = World::new();
        let other = world.spawn((BodyKind::Ship,));
        let owner = world.spawn((BodyKind::Ship,));
        assert_eq!(relations_to(&world, owner, other), RELATIONS_NEUTRAL);
        assert_eq!(classify(&world, owner, other), Iff::Neutral);
    }
}
