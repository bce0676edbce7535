//! Snapshot system: turns the player's sensors into a `SensorSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::{Entity, World};

use farsight_core::components::{CombatTarget, Label, Position};
use farsight_core::events::ContactEvent;
use farsight_core::state::{ContactView, SensorSnapshot, TrailPointView};
use farsight_core::types::{BodyId, SimTime};
use farsight_sensors::space;
use farsight_sensors::{HudTrail, RadarContact, Sensors, Trail};

/// Build the snapshot for the tick that just ran.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    sensors: &Sensors,
    events: Vec<ContactEvent>,
) -> SensorSnapshot {
    SensorSnapshot {
        time: *time,
        contacts: sensors
            .contacts()
            .filter_map(|c| contact_view(world, c))
            .collect(),
        static_contacts: sensors
            .static_contacts()
            .filter_map(|c| contact_view(world, c))
            .collect(),
        combat_target: combat_target(world, sensors.owner()),
        events,
    }
}

fn contact_view(world: &World, contact: &RadarContact<HudTrail>) -> Option<ContactView> {
    let body = contact.body();
    let kind = space::body_kind(world, body)?;
    let label = world
        .get::<&Label>(body)
        .map(|label| label.0.clone())
        .unwrap_or_else(|_| format!("{kind:?}"));

    let trail = match (contact.trail(), space::position(world, body)) {
        (Some(trail), Some(pos)) => trail_points(trail, &pos),
        _ => Vec::new(),
    };
    let color = contact
        .trail()
        .map(|trail| trail.color())
        .unwrap_or_else(|| contact.iff().color());

    Some(ContactView {
        body: BodyId::from(body),
        kind,
        label,
        distance: contact.distance(),
        iff: contact.iff(),
        color,
        trail,
    })
}

fn trail_points(trail: &HudTrail, current: &Position) -> Vec<TrailPointView> {
    trail
        .render_points(current)
        .into_iter()
        .map(|(offset, color)| TrailPointView {
            offset: offset.to_array(),
            color,
        })
        .collect()
}

fn combat_target(world: &World, owner: Entity) -> Option<BodyId> {
    world
        .get::<&CombatTarget>(owner)
        .ok()
        .and_then(|target| target.0)
        .map(BodyId::from)
}
