//! Combat target selection.

use hecs::{Entity, World};

use farsight_core::enums::TargetingCriteria;

use crate::contact::RadarContact;
use crate::space;

/// Whether `body` satisfies the criteria.
pub fn matches(criteria: TargetingCriteria, world: &World, body: Entity) -> bool {
    match criteria {
        TargetingCriteria::Ship => space::is_ship(world, body),
    }
}

/// Stable ascending sort by range; equal ranges keep their order.
pub fn sort_by_distance<T>(contacts: &mut [RadarContact<T>]) {
    contacts.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

/// First contact in list order whose body matches.
pub fn first_match<T>(
    contacts: &[RadarContact<T>],
    world: &World,
    criteria: TargetingCriteria,
) -> Option<Entity> {
    contacts
        .iter()
        .map(RadarContact::body)
        .find(|&body| matches(criteria, world, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use farsight_core::enums::BodyKind;

    fn contact(body: Entity, distance: f64) -> RadarContact<()> {
        let mut c = RadarContact::new(body);
        c.distance = distance;
        c
    }

    #[test]
    fn test_sort_is_stable() {
        let mut world = World::new();
        let a = world.spawn((BodyKind::Ship,));
        let b = world.spawn((BodyKind::Ship,));
        let c = world.spawn((BodyKind::Ship,));
        let d = world.spawn((BodyKind::Ship,));

        let mut contacts = vec![
            contact(a, 300.0),
            contact(b, 100.0),
            contact(c, 300.0),
            contact(d, 100.0),
        ];
        sort_by_distance(&mut contacts);
        let order: Vec<_> = contacts.iter().map(|c| c.body()).collect();
        assert_eq!(order, vec![b, d, a, c]);
    }

    #[test]
    fn test_first_match_skips_non_ships() {
        let mut world = World::new();
        let cargo = world.spawn((BodyKind::CargoBody,));
        let ship = world.spawn((BodyKind::Ship,));
        let contacts = vec![contact(cargo, 10.0), contact(ship, 20.0)];
        assert_eq!(
            first_match(&contacts, &world, TargetingCriteria::Ship),
            Some(ship)
        );
        assert_eq!(
            first_match(&contacts[..1], &world, TargetingCriteria::Ship),
            None
        );
    }
}
