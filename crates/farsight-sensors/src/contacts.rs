//! The dynamic contact list and its mark-and-sweep update.
//!
//! Each tick every observed ship is either marked fresh or appended as a
//! new contact. The sweep then drops every contact that was not marked,
//! refreshes the survivors, and clears their marks for the next tick.
//! Contacts keep insertion order; nothing here sorts.

use hecs::{Entity, World};

use farsight_core::components::Position;
use farsight_core::enums::{FlightState, Iff};
use farsight_core::types::FrameId;

use crate::contact::RadarContact;
use crate::iff;
use crate::space;
use crate::trail::{Trail, TrailFactory};

/// What [`ContactSet::observe`] did with a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Not something sensors track.
    Ignored,
    /// Already tracked; marked fresh.
    Refreshed,
    /// Newly tracked.
    Acquired(Iff),
}

#[derive(Debug)]
pub struct ContactSet<T> {
    contacts: Vec<RadarContact<T>>,
}

impl<T> Default for ContactSet<T> {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }
}

impl<T: Trail> ContactSet<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, RadarContact<T>> {
        self.contacts.iter()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [RadarContact<T>] {
        &mut self.contacts
    }

    /// Mark phase for one body returned by the spatial query.
    ///
    /// Only live ships other than the owner are tracked. A known body is
    /// marked fresh without being reclassified.
    pub fn observe<F>(
        &mut self,
        world: &World,
        owner: Entity,
        body: Entity,
        factory: &mut F,
    ) -> Observation
    where
        F: TrailFactory<Trail = T>,
    {
        if body == owner || !space::is_ship(world, body) || space::is_dead(world, body) {
            return Observation::Ignored;
        }

        if let Some(contact) = self.contacts.iter_mut().find(|c| c.body == body) {
            contact.fresh = true;
            return Observation::Refreshed;
        }

        let iff = iff::classify(world, owner, body);
        let trail = factory.create(world, body, iff.color());
        self.contacts.push(RadarContact::with_trail(body, iff, trail));
        Observation::Acquired(iff)
    }

    /// Sweep phase: drop unmarked contacts, update the rest.
    ///
    /// Flying ships get a new range and a trail sample. Anything else
    /// keeps its last range and has its trail reset. Returns the bodies
    /// whose contacts were dropped, in list order.
    pub fn sweep(&mut self, world: &World, owner_pos: &Position, dt: f64) -> Vec<Entity> {
        let mut lost = Vec::new();
        self.contacts.retain_mut(|contact| {
            if !contact.fresh {
                lost.push(contact.body);
                return false;
            }

            let flying = space::flight_state(world, contact.body) == Some(FlightState::Flying);
            let pos = space::position(world, contact.body);
            match (flying, pos) {
                (true, Some(pos)) => {
                    contact.distance = pos.range_to(owner_pos);
                    if let Some(trail) = contact.trail.as_mut() {
                        trail.update(dt, world);
                    }
                }
                _ => {
                    if let Some(trail) = contact.trail.as_mut() {
                        trail.reset(None);
                    }
                }
            }

            contact.fresh = false;
            true
        });
        lost
    }

    /// Reclassify every contact for `body` and recolor its trail.
    /// Returns the new class if any contact matched.
    pub fn reclassify(&mut self, world: &World, owner: Entity, body: Entity) -> Option<Iff> {
        let mut result = None;
        for contact in self.contacts.iter_mut().filter(|c| c.body == body) {
            contact.iff = iff::classify(world, owner, body);
            if let Some(trail) = contact.trail.as_mut() {
                trail.set_color(contact.iff.color());
            }
            result = Some(contact.iff);
        }
        result
    }

    pub fn reset_trails(&mut self, frame: Option<FrameId>) {
        for trail in self.contacts.iter_mut().filter_map(|c| c.trail.as_mut()) {
            trail.reset(frame);
        }
    }
}
