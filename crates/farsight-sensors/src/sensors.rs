//! The sensors facade bound to one owning ship.

use hecs::{Entity, World};

use farsight_core::components::{CombatTarget, Position};
use farsight_core::enums::TargetingCriteria;

use crate::config::SensorsConfig;
use crate::contact::RadarContact;
use crate::contacts::{ContactSet, Observation};
use crate::error::SensorsError;
use crate::events::SensorEvent;
use crate::landmarks;
use crate::space::{self, Space};
use crate::targeting;
use crate::trail::{HudTrailFactory, TrailFactory};

/// Radar contacts, landmarks and targeting for one ship.
///
/// Every ship may carry one, but only the active observer's sensors do
/// any work: [`Sensors::update`] is a no-op for every other owner.
pub struct Sensors<F: TrailFactory = HudTrailFactory> {
    owner: Entity,
    config: SensorsConfig,
    factory: F,
    contacts: ContactSet<F::Trail>,
    static_contacts: Vec<RadarContact<F::Trail>>,
    events: Vec<SensorEvent>,
}

impl Sensors<HudTrailFactory> {
    pub fn new(owner: Entity, config: SensorsConfig) -> Self {
        let factory = HudTrailFactory::new(config.trail);
        Self::with_factory(owner, config, factory)
    }
}

impl<F: TrailFactory> Sensors<F> {
    pub fn with_factory(owner: Entity, config: SensorsConfig, factory: F) -> Self {
        Self {
            owner,
            config,
            factory,
            contacts: ContactSet::default(),
            static_contacts: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn owner(&self) -> Entity {
        self.owner
    }

    pub fn config(&self) -> &SensorsConfig {
        &self.config
    }

    /// Tracked ships, in insertion order (or distance order right after
    /// [`Sensors::choose_target`]).
    pub fn contacts(&self) -> impl ExactSizeIterator<Item = &RadarContact<F::Trail>> + '_ {
        self.contacts.iter()
    }

    /// Landmarks from the most recent update.
    pub fn static_contacts(
        &self,
    ) -> impl ExactSizeIterator<Item = &RadarContact<F::Trail>> + '_ {
        self.static_contacts.iter()
    }

    pub fn contact(&self, body: Entity) -> Option<&RadarContact<F::Trail>> {
        self.contacts.iter().find(|c| c.body == body)
    }

    /// Take the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<SensorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run one sensor tick.
    ///
    /// Does nothing unless the owner is `active_observer`. Otherwise
    /// rebuilds the landmark list, marks or acquires every live ship the
    /// spatial query returns, then sweeps: unseen contacts are dropped
    /// together with their trails, and the survivors get fresh ranges and
    /// trail samples.
    pub fn update<S>(
        &mut self,
        space: &S,
        active_observer: Entity,
        dt: f64,
    ) -> Result<(), SensorsError>
    where
        S: Space + ?Sized,
    {
        if self.owner != active_observer {
            return Ok(());
        }
        let world = space.world();
        let owner_pos = self.owner_position(world)?;

        self.static_contacts = landmarks::enumerate(space);

        for body in space.bodies_maybe_near(self.owner, self.config.radar_range) {
            let observed = self
                .contacts
                .observe(world, self.owner, body, &mut self.factory);
            if let Observation::Acquired(iff) = observed {
                log::debug!("contact acquired: {body:?} ({iff:?})");
                self.events.push(SensorEvent::ContactAcquired { body, iff });
            }
        }

        for body in self.contacts.sweep(world, &owner_pos, dt) {
            log::debug!("contact lost: {body:?}");
            self.events.push(SensorEvent::ContactLost { body });
        }
        Ok(())
    }

    /// Select the nearest contact matching `criteria` as the owner's
    /// combat target.
    ///
    /// Contacts are left sorted by range. Returns `Ok(false)`, leaving any
    /// previous target in place, when nothing matches.
    pub fn choose_target(
        &mut self,
        world: &mut World,
        criteria: TargetingCriteria,
    ) -> Result<bool, SensorsError> {
        if !world.contains(self.owner) {
            return Err(SensorsError::OwnerMissing(self.owner));
        }

        let contacts = self.contacts.as_mut_slice();
        targeting::sort_by_distance(contacts);
        let Some(body) = targeting::first_match(contacts, world, criteria) else {
            log::trace!("no contact matches {criteria:?}");
            return Ok(false);
        };

        let updated = match world.get::<&mut CombatTarget>(self.owner) {
            Ok(mut target) => {
                target.0 = Some(body);
                true
            }
            Err(_) => false,
        };
        if !updated {
            world
                .insert_one(self.owner, CombatTarget(Some(body)))
                .map_err(|_| SensorsError::OwnerMissing(self.owner))?;
        }

        log::debug!("combat target selected: {body:?}");
        self.events.push(SensorEvent::TargetSelected { body });
        Ok(true)
    }

    /// Reclassify `body` and recolor its trail. Unknown bodies are ignored.
    pub fn update_iff(&mut self, world: &World, body: Entity) {
        let previous = self.contact(body).map(RadarContact::iff);
        if let Some(iff) = self.contacts.reclassify(world, self.owner, body) {
            if previous != Some(iff) {
                self.events.push(SensorEvent::IffChanged { body, iff });
            }
        }
    }

    /// Reset every contact trail to the owner's current frame.
    ///
    /// Call when the owner moves between reference frames.
    pub fn reset_trails(&mut self, world: &World) -> Result<(), SensorsError> {
        if !world.contains(self.owner) {
            return Err(SensorsError::OwnerMissing(self.owner));
        }
        self.contacts.reset_trails(space::frame(world, self.owner));
        Ok(())
    }

    fn owner_position(&self, world: &World) -> Result<Position, SensorsError> {
        if !world.contains(self.owner) {
            return Err(SensorsError::OwnerMissing(self.owner));
        }
        Ok(*world.get::<&Position>(self.owner)?)
    }
}
