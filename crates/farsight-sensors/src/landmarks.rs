//! Static contacts: stars, planets, surface structures and stations.

use crate::contact::RadarContact;
use crate::space::{self, Space};

/// One trail-less contact per landmark in the world, in world order.
pub fn enumerate<T, S>(space: &S) -> Vec<RadarContact<T>>
where
    S: Space + ?Sized,
{
    let world = space.world();
    space
        .bodies()
        .into_iter()
        .filter(|&body| space::body_kind(world, body).is_some_and(|kind| kind.is_landmark()))
        .map(RadarContact::new)
        .collect()
}
